#![warn(clippy::all)]

//! ALPS - Automated Landslide Prediction System map shell.
//!
//! Shows an interactive map, tracks the clicked location with a live
//! coordinate/time readout, and displays placeholder risk data for it.
//! Runs as a native window or in the browser.

mod clock;
mod map;
mod shell;
mod state;
mod ui;

use clock::TimeClock;
use eframe::egui;
use shell::AppShell;
use state::{url_state, MapSettings, MockRiskProvider};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ALPS")
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ALPS",
        native_options,
        Box::new(|cc| Ok(Box::new(AlpsApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(AlpsApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// eframe host for the shell.
pub struct AlpsApp {
    shell: AppShell,
}

impl AlpsApp {
    /// Creates a new AlpsApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut settings = MapSettings::load();
        url_state::parse_from_url().apply_to(&mut settings);
        log::info!(
            "Starting at ({}, {}) zoom {}, token {}",
            settings.center_lat,
            settings.center_lon,
            settings.zoom,
            if settings.access_token.is_some() {
                "configured"
            } else {
                "missing"
            }
        );

        let shell = AppShell::new(
            Some(&cc.egui_ctx),
            &settings,
            MockRiskProvider,
            TimeClock::new(),
            web_time::Instant::now(),
        );

        Self { shell }
    }
}

impl eframe::App for AlpsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.shell.frame(ctx, web_time::Instant::now());
    }
}

//! Map widget adapter.
//!
//! [`MapWidget`] owns the single embedded map instance and exposes the only
//! operations the shell needs: one-time initialization, zoom steps and a
//! location-click subscription. The mapping library itself sits behind
//! [`MapEngine`]; [`WalkersEngine`] is the production implementation.

mod error;
mod mapbox;
mod walkers_engine;

pub use error::MapError;
pub use walkers_engine::WalkersEngine;

use crate::state::Coordinate;
use eframe::egui;
use geo_types::Coord;

/// Everything needed to create a map instance.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: Coordinate,
    pub zoom: f64,
    /// Style reference, `mapbox://styles/<owner>/<style>`.
    pub style: String,
    pub access_token: Option<String>,
}

/// A live interactive map provided by an external library.
pub trait MapEngine: Sized {
    /// Creates the instance, bound to the context it will render into.
    fn create(ctx: &egui::Context, options: &MapOptions) -> Result<Self, MapError>;

    fn zoom_in(&mut self);

    fn zoom_out(&mut self);

    /// Draws the map into `ui` and returns the position (x = lon, y = lat)
    /// of a click on the map surface this frame, if any.
    fn show(&mut self, ui: &mut egui::Ui) -> Option<Coord<f64>>;

    /// Problem noticed while the map is running, such as tiles that never
    /// arrive because the token was revoked.
    fn load_error(&self) -> Option<MapError> {
        None
    }
}

/// Lifecycle of the map instance.
#[derive(Debug, Clone, PartialEq)]
pub enum MapStatus {
    Uninitialized,
    Live,
    Unavailable(MapError),
}

type ClickHandler = Box<dyn FnMut(Coordinate)>;

/// Owner of the embedded map instance.
pub struct MapWidget<E: MapEngine = WalkersEngine> {
    engine: Option<E>,
    status: MapStatus,
    click_handler: Option<ClickHandler>,
}

impl<E: MapEngine> Default for MapWidget<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MapEngine> MapWidget<E> {
    pub fn new() -> Self {
        Self {
            engine: None,
            status: MapStatus::Uninitialized,
            click_handler: None,
        }
    }

    /// Creates the map instance if none is live.
    ///
    /// Does nothing when an instance already exists or when there is no
    /// container to render into yet. Creation failures leave the widget
    /// without an instance and are reported through [`MapWidget::status`].
    pub fn initialize(&mut self, container: Option<&egui::Context>, options: &MapOptions) {
        if self.engine.is_some() {
            log::debug!("Map already initialized, ignoring");
            return;
        }
        let Some(ctx) = container else {
            log::debug!("Map container not mounted yet, skipping initialization");
            return;
        };

        match E::create(ctx, options) {
            Ok(engine) => {
                log::info!(
                    "Map initialized at ({}, {}) zoom {} with style {}",
                    options.center.latitude(),
                    options.center.longitude(),
                    options.zoom,
                    options.style
                );
                self.engine = Some(engine);
                self.status = MapStatus::Live;
            }
            Err(e) => {
                log::error!("Failed to initialize map: {}", e);
                self.status = MapStatus::Unavailable(e);
            }
        }
    }

    pub fn status(&self) -> &MapStatus {
        &self.status
    }

    pub fn is_live(&self) -> bool {
        self.engine.is_some()
    }

    /// Runtime problem reported by the live map, if any.
    pub fn load_error(&self) -> Option<MapError> {
        self.engine.as_ref().and_then(MapEngine::load_error)
    }

    pub fn zoom_in(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.zoom_in();
        }
    }

    pub fn zoom_out(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.zoom_out();
        }
    }

    /// Sets the click handler, replacing any previous one.
    pub fn on_location_click(&mut self, handler: impl FnMut(Coordinate) + 'static) {
        if self.click_handler.is_some() {
            log::debug!("Replacing map click handler");
        }
        self.click_handler = Some(Box::new(handler));
    }

    /// Draws the live map and dispatches a click, if one happened.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if let Some(position) = engine.show(ui) {
            self.dispatch_click(position);
        }
    }

    /// Validates a raw click position and forwards it to the handler.
    fn dispatch_click(&mut self, position: Coord<f64>) {
        let coordinate = match Coordinate::try_from(position) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Ignoring map click: {}", e);
                return;
            }
        };
        log::debug!(
            "Map clicked at ({}, {})",
            coordinate.latitude(),
            coordinate.longitude()
        );
        if let Some(handler) = self.click_handler.as_mut() {
            handler(coordinate);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    thread_local! {
        static CREATED: Cell<usize> = const { Cell::new(0) };
    }

    /// Engine double that records calls and replays queued clicks.
    #[derive(Default)]
    pub(crate) struct FakeEngine {
        pub zoom: f64,
        pub pending_click: Option<Coord<f64>>,
        pub load_error: Option<MapError>,
    }

    impl MapEngine for FakeEngine {
        fn create(_ctx: &egui::Context, options: &MapOptions) -> Result<Self, MapError> {
            if options.access_token.is_none() {
                return Err(MapError::MissingAccessToken);
            }
            CREATED.with(|c| c.set(c.get() + 1));
            Ok(Self {
                zoom: options.zoom,
                ..Default::default()
            })
        }

        fn zoom_in(&mut self) {
            self.zoom += 1.0;
        }

        fn zoom_out(&mut self) {
            self.zoom -= 1.0;
        }

        fn show(&mut self, _ui: &mut egui::Ui) -> Option<Coord<f64>> {
            self.pending_click.take()
        }

        fn load_error(&self) -> Option<MapError> {
            self.load_error.clone()
        }
    }

    impl MapWidget<FakeEngine> {
        /// Queues a raw click to be reported on the next `show`.
        pub(crate) fn queue_click(&mut self, lat: f64, lon: f64) {
            if let Some(engine) = self.engine.as_mut() {
                engine.pending_click = Some(Coord { x: lon, y: lat });
            }
        }

        pub(crate) fn engine_zoom(&self) -> Option<f64> {
            self.engine.as_ref().map(|e| e.zoom)
        }

        pub(crate) fn fail_tiles(&mut self) {
            if let Some(engine) = self.engine.as_mut() {
                engine.load_error = Some(MapError::TilesUnavailable);
            }
        }
    }

    pub(crate) fn options() -> MapOptions {
        MapOptions {
            center: Coordinate::default(),
            zoom: 10.0,
            style: "mapbox://styles/mapbox/outdoors-v11".to_string(),
            access_token: Some("pk.test".to_string()),
        }
    }

    pub(crate) fn created_count() -> usize {
        CREATED.with(|c| c.get())
    }

    /// Runs `f` inside a headless egui frame.
    pub(crate) fn with_ui(f: impl FnOnce(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let mut f = Some(f);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(f) = f.take() {
                    f(ui);
                }
            });
        });
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let ctx = egui::Context::default();
        let mut widget = MapWidget::<FakeEngine>::new();
        let before = created_count();

        widget.initialize(Some(&ctx), &options());
        widget.initialize(Some(&ctx), &options());

        assert_eq!(created_count() - before, 1);
        assert!(widget.is_live());
        assert_eq!(widget.status(), &MapStatus::Live);
    }

    #[test]
    fn test_initialize_without_container_is_noop() {
        let mut widget = MapWidget::<FakeEngine>::new();
        let before = created_count();

        widget.initialize(None, &options());

        assert_eq!(created_count(), before);
        assert!(!widget.is_live());
        assert_eq!(widget.status(), &MapStatus::Uninitialized);
    }

    #[test]
    fn test_initialize_failure_is_reported() {
        let ctx = egui::Context::default();
        let mut widget = MapWidget::<FakeEngine>::new();
        let mut opts = options();
        opts.access_token = None;

        widget.initialize(Some(&ctx), &opts);

        assert!(!widget.is_live());
        assert_eq!(
            widget.status(),
            &MapStatus::Unavailable(MapError::MissingAccessToken)
        );
    }

    #[test]
    fn test_load_error_comes_from_live_engine() {
        let ctx = egui::Context::default();
        let mut widget = MapWidget::<FakeEngine>::new();
        widget.fail_tiles();
        assert_eq!(widget.load_error(), None);

        widget.initialize(Some(&ctx), &options());
        assert_eq!(widget.load_error(), None);

        widget.fail_tiles();
        assert_eq!(widget.load_error(), Some(MapError::TilesUnavailable));
        assert_eq!(widget.status(), &MapStatus::Live);
    }

    #[test]
    fn test_zoom_without_instance_is_noop() {
        let mut widget = MapWidget::<FakeEngine>::new();
        widget.zoom_in();
        widget.zoom_out();
        assert!(!widget.is_live());
        assert_eq!(widget.engine_zoom(), None);
    }

    #[test]
    fn test_zoom_steps_reach_engine() {
        let ctx = egui::Context::default();
        let mut widget = MapWidget::<FakeEngine>::new();
        widget.initialize(Some(&ctx), &options());

        widget.zoom_in();
        widget.zoom_in();
        widget.zoom_out();

        assert_eq!(widget.engine_zoom(), Some(11.0));
    }

    #[test]
    fn test_click_reaches_handler() {
        let ctx = egui::Context::default();
        let mut widget = MapWidget::<FakeEngine>::new();
        widget.initialize(Some(&ctx), &options());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        widget.on_location_click(move |c| sink.borrow_mut().push(c));

        widget.queue_click(9.93, 76.24);
        with_ui(|ui| widget.show(ui));

        assert_eq!(*seen.borrow(), vec![Coordinate::new(9.93, 76.24).unwrap()]);
    }

    #[test]
    fn test_reregistering_replaces_handler() {
        let ctx = egui::Context::default();
        let mut widget = MapWidget::<FakeEngine>::new();
        widget.initialize(Some(&ctx), &options());
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let sink = first.clone();
        widget.on_location_click(move |_| sink.set(sink.get() + 1));
        let sink = second.clone();
        widget.on_location_click(move |_| sink.set(sink.get() + 1));

        widget.queue_click(1.0, 2.0);
        with_ui(|ui| widget.show(ui));

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_out_of_range_click_rejected() {
        let ctx = egui::Context::default();
        let mut widget = MapWidget::<FakeEngine>::new();
        widget.initialize(Some(&ctx), &options());
        let calls = Rc::new(Cell::new(0));
        let sink = calls.clone();
        widget.on_location_click(move |_| sink.set(sink.get() + 1));

        widget.queue_click(12.0, 200.0);
        with_ui(|ui| widget.show(ui));
        widget.queue_click(-95.0, 0.0);
        with_ui(|ui| widget.show(ui));

        assert_eq!(calls.get(), 0);
    }
}

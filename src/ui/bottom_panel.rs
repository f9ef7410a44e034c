//! Bottom panel UI: copyright footer.

use super::colors;
use eframe::egui::{self, RichText};

pub const FOOTER_TEXT: &str = "© 2025 ALPS - Automated Landslide Prediction System";

pub fn render_bottom_panel(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_panel")
        .exact_height(24.0)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(FOOTER_TEXT).size(12.0).color(colors::ui::LABEL));
            });
        });
}

//! Right panel UI: risk summary card for the selected location.

use super::colors;
use crate::state::risk::RiskStatus;
use crate::state::{format_coordinate, Coordinate, RiskSummary};
use eframe::egui::{self, Color32, RichText};

/// Label/value rows shown on the summary card.
pub fn summary_rows(coordinates: Coordinate, summary: &RiskSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Lat", format_coordinate(coordinates.latitude())),
        ("Long", format_coordinate(coordinates.longitude())),
        ("Rainfall", summary.rainfall_label()),
        ("Soil Type", summary.soil_type.to_string()),
        ("Status", summary.status.label().to_string()),
    ]
}

pub fn status_color(status: RiskStatus) -> Color32 {
    match status {
        RiskStatus::High => colors::risk::HIGH,
    }
}

pub fn render_right_panel(ctx: &egui::Context, coordinates: Coordinate, summary: &RiskSummary) {
    egui::SidePanel::right("right_panel")
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Summary");
            ui.separator();

            egui::Grid::new("summary_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for (label, value) in summary_rows(coordinates, summary) {
                        ui.label(RichText::new(label).strong().color(colors::ui::LABEL));
                        ui.label(RichText::new(value).color(colors::ui::VALUE));
                        ui.end_row();
                    }
                });
        });
}

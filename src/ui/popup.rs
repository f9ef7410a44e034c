//! Location popup shown after a map click.

use super::colors;
use super::right_panel::status_color;
use crate::state::{format_coordinate, Coordinate, RiskSummary};
use eframe::egui::{self, RichText};

/// Label/value rows shown in the popup, status last.
pub fn popup_rows(coordinates: Coordinate, summary: &RiskSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Location", summary.location_name.to_string()),
        ("Lat", format_coordinate(coordinates.latitude())),
        ("Long", format_coordinate(coordinates.longitude())),
        ("Rainfall", summary.rainfall_label()),
        ("Soil", summary.soil_type.to_string()),
        ("Status", summary.status.label().to_string()),
    ]
}

/// Draws the popup. Returns true when the user asked to close it.
pub fn render_location_popup(
    ctx: &egui::Context,
    coordinates: Coordinate,
    summary: &RiskSummary,
) -> bool {
    let mut close = false;

    egui::Window::new("location_popup")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .frame(egui::Frame::popup(&ctx.style()))
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                if ui.small_button("×").clicked() {
                    close = true;
                }
            });

            egui::Grid::new("popup_grid")
                .num_columns(2)
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    for (label, value) in popup_rows(coordinates, summary) {
                        ui.label(RichText::new(format!("{}:", label)).strong());
                        let value = if label == "Status" {
                            RichText::new(value).color(status_color(summary.status))
                        } else {
                            RichText::new(value).color(colors::ui::VALUE)
                        };
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });

    close
}

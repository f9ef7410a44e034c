//! Central canvas UI: the map with its coordinate/time readout and zoom
//! controls overlaid.

use super::colors;
use crate::map::{MapEngine, MapStatus, MapWidget};
use crate::state::{format_coordinate, Coordinate};
use eframe::egui::{self, Rect, RichText, Vec2};

/// Zoom button presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCommand {
    In,
    Out,
}

/// Text of the coordinate/time readout.
pub fn readout_text(coordinates: Coordinate, time: &str) -> String {
    format!(
        "Lat: {} | Long: {} | Time: {}",
        format_coordinate(coordinates.latitude()),
        format_coordinate(coordinates.longitude()),
        time
    )
}

/// Render the map canvas. Returns the zoom button pressed this frame.
pub fn render_canvas<E: MapEngine>(
    ctx: &egui::Context,
    map: &mut MapWidget<E>,
    coordinates: Coordinate,
    time: &str,
) -> Option<ZoomCommand> {
    let mut zoom = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::canvas::BACKGROUND))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();

            if map.is_live() {
                map.show(ui);
                if let Some(e) = map.load_error() {
                    draw_load_warning(ui, &rect, &e.to_string());
                }
            } else {
                let message = match map.status() {
                    MapStatus::Unavailable(e) => e.to_string(),
                    _ => "Map is not initialized".to_string(),
                };
                draw_unavailable(ui, &message);
            }

            draw_readout(ui, &rect, coordinates, time);
            zoom = draw_zoom_controls(ui, &rect);
        });

    zoom
}

fn draw_unavailable(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.label(
            RichText::new("Map unavailable")
                .strong()
                .size(18.0)
                .color(colors::canvas::ERROR),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(message).color(colors::ui::LABEL));
    });
}

fn draw_load_warning(ui: &mut egui::Ui, rect: &Rect, message: &str) {
    let overlay_rect = Rect::from_min_size(
        rect.center_bottom() + Vec2::new(-220.0, -48.0),
        Vec2::new(440.0, 28.0),
    );

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        egui::Frame::new()
            .fill(colors::canvas::overlay())
            .corner_radius(4.0)
            .inner_margin(egui::Margin::symmetric(8, 4))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(message)
                        .size(12.0)
                        .color(colors::canvas::ERROR),
                );
            });
    });
}

fn draw_readout(ui: &mut egui::Ui, rect: &Rect, coordinates: Coordinate, time: &str) {
    let overlay_rect = Rect::from_min_size(
        rect.left_top() + Vec2::new(10.0, 10.0),
        Vec2::new(360.0, 28.0),
    );

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        egui::Frame::new()
            .fill(colors::canvas::overlay())
            .corner_radius(4.0)
            .inner_margin(egui::Margin::symmetric(8, 4))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(readout_text(coordinates, time))
                        .monospace()
                        .size(12.0)
                        .color(colors::ui::VALUE),
                );
            });
    });
}

fn draw_zoom_controls(ui: &mut egui::Ui, rect: &Rect) -> Option<ZoomCommand> {
    let overlay_rect = Rect::from_min_size(
        rect.right_top() + Vec2::new(-46.0, 10.0),
        Vec2::new(36.0, 72.0),
    );
    let mut command = None;

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            let size = Vec2::splat(28.0);
            let zoom_in = egui::Button::new(RichText::new("+").size(16.0));
            if ui.add_sized(size, zoom_in).clicked() {
                command = Some(ZoomCommand::In);
            }
            let zoom_out = egui::Button::new(RichText::new("-").size(16.0));
            if ui.add_sized(size, zoom_out).clicked() {
                command = Some(ZoomCommand::Out);
            }
        });
    });

    command
}

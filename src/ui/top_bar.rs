//! Top bar UI: app branding, location search box, and status.

use super::colors;
use crate::state::AppState;
use eframe::egui::{self, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(40.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // Badge
                egui::Frame::new()
                    .fill(colors::header::BADGE)
                    .corner_radius(4.0)
                    .inner_margin(egui::Margin::symmetric(6, 2))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("ALPS")
                                .strong()
                                .size(16.0)
                                .color(colors::header::BADGE_TEXT),
                        );
                    });

                ui.label(
                    RichText::new("Automated Landslide Prediction System")
                        .strong()
                        .size(15.0)
                        .color(colors::header::TITLE),
                );

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(colors::ui::STATUS),
                );

                // Search sits on the right; typing does not trigger anything yet
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.search_text)
                            .hint_text("Search location...")
                            .desired_width(200.0),
                    );
                    ui.label(RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS).size(16.0));
                });
            });
        });
}

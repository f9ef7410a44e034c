//! UI modules for the ALPS map shell.
//!
//! The UI is split into distinct panels:
//! - Top bar: Branding, status, and location search box
//! - Bottom panel: Footer
//! - Right panel: Risk summary card
//! - Central canvas: Map with coordinate/time readout and zoom controls
//! - Popup: Location details after a map click

mod bottom_panel;
mod canvas;
mod colors;
mod popup;
mod right_panel;
mod top_bar;

pub use bottom_panel::render_bottom_panel;
pub use canvas::{render_canvas, ZoomCommand};
pub use popup::render_location_popup;
pub use right_panel::render_right_panel;
pub use top_bar::render_top_bar;

#[cfg(test)]
pub use popup::popup_rows;
#[cfg(test)]
pub use right_panel::summary_rows;

//! Centralized color constants for the UI.
//!
//! This module provides consistent colors across all UI panels.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for field labels.
    pub const LABEL: Color32 = Color32::from_rgb(140, 140, 150);
    /// Brighter color for field values.
    pub const VALUE: Color32 = Color32::from_rgb(220, 220, 230);
    /// Status text in the header.
    pub const STATUS: Color32 = Color32::GRAY;
}

/// Header branding.
pub mod header {
    use super::Color32;

    /// "ALPS" badge fill.
    pub const BADGE: Color32 = Color32::from_rgb(30, 110, 220);
    /// "ALPS" badge text.
    pub const BADGE_TEXT: Color32 = Color32::WHITE;
    /// Title next to the badge.
    pub const TITLE: Color32 = Color32::WHITE;
}

/// Map canvas and its overlays.
pub mod canvas {
    use super::Color32;

    /// Background behind the map or the unavailable placeholder.
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
    /// Placeholder error text.
    pub const ERROR: Color32 = Color32::from_rgb(255, 110, 110);

    /// Overlay panel fill - requires alpha, use function.
    pub fn overlay() -> Color32 {
        Color32::from_rgba_unmultiplied(15, 15, 25, 200)
    }
}

/// Risk status highlighting.
pub mod risk {
    use super::Color32;

    /// High risk (#ff4d4d).
    pub const HIGH: Color32 = Color32::from_rgb(255, 77, 77);
}

//! Application state management.
//!
//! The shell owns exactly one [`AppState`]; everything else is derived from
//! it when the panels draw.

pub mod coordinate;
pub mod risk;
pub mod settings;
pub mod url_state;

pub use coordinate::{format_coordinate, Coordinate};
pub use risk::{MockRiskProvider, RiskProvider, RiskSummary};
pub use settings::MapSettings;

/// Events that change the shell state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellEvent {
    /// The map surface was clicked at a validated location.
    LocationClicked(Coordinate),
    /// The user closed the location popup.
    PopupDismissed,
}

/// Root application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Last selected location. Replaced as a whole, never field by field.
    pub coordinates: Coordinate,

    /// Whether the location popup is shown
    pub popup_visible: bool,

    /// Clock text shown in the readout, updated on every clock tick
    pub clock_reading: String,

    /// Header search box text. Accepted but never acted on.
    pub search_text: String,

    /// Application status message displayed in the header
    pub status_message: String,
}

impl AppState {
    /// Fresh session state, centered on the default location.
    pub fn new() -> Self {
        Self {
            coordinates: Coordinate::default(),
            status_message: "Ready".to_string(),
            ..Default::default()
        }
    }

    pub fn apply(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::LocationClicked(coordinate) => {
                self.coordinates = coordinate;
                self.popup_visible = true;
            }
            ShellEvent::PopupDismissed => {
                self.popup_visible = false;
            }
        }
    }
}

//! Map configuration: access token, style and initial view.
//!
//! Natively the values come from the environment (a `.env` file is honored).
//! On the web the token is baked in at build time and settings are read from
//! localStorage so they survive page reloads.

use super::coordinate::{Coordinate, DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use crate::map::MapOptions;
use serde::{Deserialize, Serialize};

/// Environment variable holding the Mapbox access token.
pub const TOKEN_ENV: &str = "ALPS_MAPBOX_TOKEN";
/// Environment variable overriding the style reference.
pub const STYLE_ENV: &str = "ALPS_MAP_STYLE";
/// Environment variable overriding the initial zoom.
pub const ZOOM_ENV: &str = "ALPS_MAP_ZOOM";

pub const DEFAULT_STYLE: &str = "mapbox://styles/mapbox/outdoors-v11";
pub const DEFAULT_ZOOM: f64 = 10.0;

/// Map settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Mapbox access token. Never hardcoded.
    pub access_token: Option<String>,
    /// Style reference, `mapbox://styles/<owner>/<style>`.
    pub style: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            access_token: None,
            style: DEFAULT_STYLE.to_string(),
            center_lat: DEFAULT_LATITUDE,
            center_lon: DEFAULT_LONGITUDE,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapSettings {
    /// localStorage key for persisted settings.
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "alps_map_settings";

    /// Load settings from `.env` and the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Failed to read .env file: {}", e),
        }

        let mut settings = Self::default();
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    /// Load settings from the build-time token and localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let mut settings = Self::load_stored().unwrap_or_default();
        if settings.access_token.is_none() {
            settings.access_token = option_env!("ALPS_MAPBOX_TOKEN")
                .filter(|t| !t.trim().is_empty())
                .map(str::to_string);
        }
        settings
    }

    #[cfg(target_arch = "wasm32")]
    fn load_stored() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item(Self::STORAGE_KEY).ok()??;

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded map settings from localStorage");
                Some(settings)
            }
            Err(e) => {
                log::warn!("Failed to parse map settings: {}", e);
                None
            }
        }
    }

    /// Overlay values from an environment lookup. Blank or unparsable values
    /// are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_blank(TOKEN_ENV) {
            self.access_token = Some(token.trim().to_string());
        }
        if let Some(style) = non_blank(STYLE_ENV) {
            self.style = style.trim().to_string();
        }
        if let Some(zoom) = non_blank(ZOOM_ENV) {
            match zoom.trim().parse::<f64>() {
                Ok(z) => self.zoom = z,
                Err(_) => log::warn!("Ignoring {}={:?}: not a number", ZOOM_ENV, zoom),
            }
        }
    }

    /// Initial center, falling back to the default if the stored one is invalid.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.center_lat, self.center_lon).unwrap_or_else(|e| {
            log::warn!("Configured map center rejected ({}), using default", e);
            Coordinate::default()
        })
    }

    /// Options for the map widget.
    pub fn map_options(&self) -> MapOptions {
        MapOptions {
            center: self.center(),
            zoom: self.zoom,
            style: self.style.clone(),
            access_token: self.access_token.clone(),
        }
    }
}

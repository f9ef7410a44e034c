//! Initial map view from the page URL.
//!
//! `?lat=..&lon=..&zoom=..` positions the map when the app starts. The URL is
//! only read; the selected location is never written back.

use super::settings::MapSettings;

/// Parsed URL parameters.
#[derive(Debug, Default, PartialEq)]
pub struct UrlParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub zoom: Option<f64>,
}

impl UrlParams {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let mut params = UrlParams::default();

        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return params;
        }

        for pair in query.split('&') {
            let mut kv = pair.splitn(2, '=');
            let key = kv.next().unwrap_or("");
            let value = kv.next().unwrap_or("");
            match key {
                "lat" => params.lat = value.parse().ok(),
                "lon" => params.lon = value.parse().ok(),
                "zoom" => params.zoom = value.parse().ok(),
                _ => {}
            }
        }

        params
    }

    /// Apply the parameters on top of loaded settings.
    pub fn apply_to(&self, settings: &mut MapSettings) {
        if let Some(lat) = self.lat {
            settings.center_lat = lat;
        }
        if let Some(lon) = self.lon {
            settings.center_lon = lon;
        }
        if let Some(zoom) = self.zoom {
            settings.zoom = zoom;
        }
    }
}

/// Parse URL query parameters from the current browser URL.
#[cfg(target_arch = "wasm32")]
pub fn parse_from_url() -> UrlParams {
    let Some(window) = web_sys::window() else {
        return UrlParams::default();
    };
    match window.location().search() {
        Ok(search) => UrlParams::parse(&search),
        Err(_) => UrlParams::default(),
    }
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_from_url() -> UrlParams {
    UrlParams::default()
}

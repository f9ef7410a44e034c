//! Map initialization errors.

use thiserror::Error;

/// Why the map could not be created.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("no Mapbox access token configured (set ALPS_MAPBOX_TOKEN)")]
    MissingAccessToken,
    #[error("Mapbox access token is malformed")]
    InvalidAccessToken,
    #[error("unsupported map style reference: {0}")]
    InvalidStyle(String),
    #[error("zoom level {0} is outside the supported range")]
    InvalidZoom(f64),
    #[error("no map tiles could be loaded; check the network and the Mapbox access token")]
    TilesUnavailable,
}

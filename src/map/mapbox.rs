//! Mapbox raster tiles for the map engine.
//!
//! Style references use the `mapbox://styles/<owner>/<style>` form and are
//! served through the Static Tiles API as 256px raster tiles.

use super::error::MapError;
use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

const STYLE_SCHEME: &str = "mapbox://styles/";
const TILES_BASE_URL: &str = "https://api.mapbox.com/styles/v1";

/// Highest zoom the raster tiles are requested at.
pub const MAX_ZOOM: f64 = 22.0;

/// Parsed `mapbox://styles/<owner>/<style>` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStyle {
    pub owner: String,
    pub style_id: String,
}

impl MapStyle {
    pub fn parse(reference: &str) -> Result<Self, MapError> {
        let invalid = || MapError::InvalidStyle(reference.to_string());

        let path = reference.trim().strip_prefix(STYLE_SCHEME).ok_or_else(invalid)?;
        let (owner, style_id) = path.split_once('/').ok_or_else(invalid)?;

        let valid_segment = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        };
        if !valid_segment(owner) || !valid_segment(style_id) {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            style_id: style_id.to_string(),
        })
    }
}

/// Checks that a token is present and looks like a Mapbox token.
pub fn validate_token(token: Option<&str>) -> Result<&str, MapError> {
    let token = token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(MapError::MissingAccessToken)?;

    let known_prefix = token.starts_with("pk.") || token.starts_with("sk.");
    let url_safe = token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_');
    if !known_prefix || !url_safe {
        return Err(MapError::InvalidAccessToken);
    }

    Ok(token)
}

/// Tile source for a Mapbox style.
#[derive(Debug, Clone)]
pub struct MapboxTileSource {
    style: MapStyle,
    access_token: String,
}

impl MapboxTileSource {
    pub fn new(style: MapStyle, access_token: &str) -> Self {
        Self {
            style,
            access_token: access_token.to_string(),
        }
    }

    fn url_for(&self, x: u32, y: u32, zoom: u8) -> String {
        format!(
            "{}/{}/{}/tiles/256/{}/{}/{}?access_token={}",
            TILES_BASE_URL, self.style.owner, self.style.style_id, zoom, x, y, self.access_token
        )
    }
}

impl TileSource for MapboxTileSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.url_for(tile_id.x, tile_id.y, tile_id.zoom)
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "© Mapbox © OpenStreetMap",
            url: "https://www.mapbox.com/about/maps/",
            logo_light: None,
            logo_dark: None,
        }
    }
}

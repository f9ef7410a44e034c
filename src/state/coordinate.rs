//! Geographic coordinate value and its display formatting.

use geo_types::Coord;
use thiserror::Error;

/// Default map focus: Idukki district, Kerala.
pub const DEFAULT_LATITUDE: f64 = 9.85;
pub const DEFAULT_LONGITUDE: f64 = 76.95;

/// Reasons a latitude/longitude pair is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinate is not a finite number")]
    NotFinite,
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A validated latitude/longitude pair in degrees.
///
/// Fields are private so every value in circulation has passed the range
/// check in [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

/// Map libraries hand positions around as (x = lon, y = lat).
impl TryFrom<Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    fn try_from(coord: Coord<f64>) -> Result<Self, Self::Error> {
        Coordinate::new(coord.y, coord.x)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        Coord {
            x: coordinate.longitude,
            y: coordinate.latitude,
        }
    }
}

/// Formats a degree value with exactly three decimals.
///
/// Ties round away from zero (`0.0625` -> `0.063`), unlike `{:.3}` which
/// rounds exact binary ties to even.
pub fn format_coordinate(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{:.3}", rounded)
}

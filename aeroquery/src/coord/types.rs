//! Coordinate type definitions

use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A signed geographic position in decimal degrees.
///
/// Positive latitude is north, positive longitude is east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lon: f64,
}

impl LatLon {
    /// Create a position without validation.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a position, rejecting non-finite or out-of-range values.
    pub fn checked(lat: f64, lon: f64) -> Result<Self, CoordParseError> {
        if !lat.is_finite() || !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordParseError::LatitudeOutOfRange(lat));
        }
        if !lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordParseError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Position as a `(lat, lon)` tuple.
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Format as degrees-minutes-seconds with hemisphere letters,
    /// e.g. `40°38'23.0"N 73°46'44.0"W`.
    pub fn to_dms_string(&self) -> String {
        let lat_hemi = if self.lat < 0.0 { 'S' } else { 'N' };
        let lon_hemi = if self.lon < 0.0 { 'W' } else { 'E' };
        format!(
            "{}{} {}{}",
            format_dms(self.lat.abs()),
            lat_hemi,
            format_dms(self.lon.abs()),
            lon_hemi
        )
    }
}

fn format_dms(value: f64) -> String {
    // Round at tenth-of-a-second resolution first so 59.96" never prints as 60.0"
    let tenths = (value * 36_000.0).round() as u64;
    let degrees = tenths / 36_000;
    let minutes = (tenths % 36_000) / 600;
    let seconds = (tenths % 600) as f64 / 10.0;
    format!("{}°{:02}'{:04.1}\"", degrees, minutes, seconds)
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

impl From<(f64, f64)> for LatLon {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Which coordinate a hemisphere letter refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Hemisphere letter attached to (or standing next to) a coordinate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parse a single lowercase hemisphere letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Self::North),
            's' => Some(Self::South),
            'e' => Some(Self::East),
            'w' => Some(Self::West),
            _ => None,
        }
    }

    /// The axis this hemisphere selects.
    pub fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Latitude,
            Self::East | Self::West => Axis::Longitude,
        }
    }

    /// Sign applied to the magnitude: south and west are negative.
    pub fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}

/// Reasons a coordinate string could not be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordParseError {
    /// Input was empty after normalization
    #[error("Empty coordinate input")]
    Empty,

    /// Only two or three tokens form a coordinate pair
    #[error("Expected 2 or 3 tokens, found {0}")]
    TokenCount(usize),

    /// A token is neither a number nor a hemisphere letter
    #[error("Invalid coordinate token: '{0}'")]
    InvalidToken(String),

    /// Degrees, minutes or seconds outside their allowed range
    #[error("DMS component out of range in '{0}'")]
    DmsOutOfRange(String),

    /// Hemisphere letters do not name one latitude and one longitude
    #[error("Hemisphere letters do not identify one latitude and one longitude")]
    ConflictingHemispheres,

    /// Three tokens without exactly one standalone hemisphere letter
    #[error("Three-token input needs exactly one standalone hemisphere letter")]
    MisplacedHemisphere,

    /// Latitude is not finite or outside -90..=90
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    LatitudeOutOfRange(f64),

    /// Longitude is not finite or outside -180..=180
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    LongitudeOutOfRange(f64),
}

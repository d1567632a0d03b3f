//! Great-circle navigation mathematics.
//!
//! Distances and bearings on a spherical earth, used by the radius filter and
//! by the point-to-point measurement tool.
//!
//! # Coordinate System
//!
//! - Latitude: degrees north (-90 to 90)
//! - Longitude: degrees east (-180 to 180)
//! - Bearing: degrees true (0-360, 0=north, 90=east)
//! - Distance: nautical miles (1 nm = 1852 meters)

use std::f64::consts::PI;

use crate::coord::LatLon;

/// Earth's radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Kilometres per nautical mile.
pub const KM_PER_NM: f64 = 1.852;

/// Statute miles per nautical mile.
pub const SM_PER_NM: f64 = 1.150_779_448;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians to degrees conversion factor.
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Calculate the great-circle distance between two positions.
///
/// Uses the haversine formula. Symmetric in its endpoints.
///
/// # Arguments
///
/// * `from` - First position as (latitude, longitude) in degrees
/// * `to` - Second position as (latitude, longitude) in degrees
///
/// # Returns
///
/// Distance in nautical miles.
///
/// # Example
///
/// ```
/// use aeroquery::navigation::distance_nm;
///
/// // One degree of latitude is about 60 nm
/// let dist = distance_nm((0.0, 0.0), (1.0, 0.0));
/// assert!((dist - 60.0).abs() < 0.1);
/// ```
pub fn distance_nm(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lat = (lat2 - lat1) * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_NM * c
}

/// Calculate the initial bearing from one position to another.
///
/// Returns the forward azimuth leaving `from` toward `to`. In general
/// `initial_bearing_deg(a, b)` and `initial_bearing_deg(b, a)` differ by
/// something other than 180° because great circles are not rhumb lines.
///
/// # Returns
///
/// Bearing in degrees true, in `[0, 360)`.
///
/// # Example
///
/// ```
/// use aeroquery::navigation::initial_bearing_deg;
///
/// let bearing = initial_bearing_deg((0.0, 0.0), (0.0, 1.0));
/// assert!((bearing - 90.0).abs() < 1e-9);
/// ```
pub fn initial_bearing_deg(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let y = delta_lon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();

    normalize_bearing(y.atan2(x) * RAD_TO_DEG)
}

/// Calculate the bearing on arrival at `to` when flying the great circle from `from`.
pub fn final_bearing_deg(from: (f64, f64), to: (f64, f64)) -> f64 {
    normalize_bearing(initial_bearing_deg(to, from) + 180.0)
}

/// Project a position along a bearing for a given distance.
///
/// # Arguments
///
/// * `start` - Starting position as (latitude, longitude) in degrees
/// * `bearing_deg` - True bearing in degrees
/// * `distance_nm` - Distance to travel in nautical miles
///
/// # Returns
///
/// New position as (latitude, longitude) in degrees, longitude in -180..=180.
///
/// # Example
///
/// ```
/// use aeroquery::navigation::project_position;
///
/// // 60 nm north of the equator is about one degree of latitude
/// let (lat, lon) = project_position((0.0, 0.0), 0.0, 60.0);
/// assert!((lat - 1.0).abs() < 0.01);
/// assert!(lon.abs() < 1e-9);
/// ```
pub fn project_position(start: (f64, f64), bearing_deg: f64, distance_nm: f64) -> (f64, f64) {
    let (lat1, lon1) = start;
    let lat1_rad = lat1 * DEG_TO_RAD;
    let lon1_rad = lon1 * DEG_TO_RAD;
    let bearing_rad = bearing_deg * DEG_TO_RAD;
    let angular_distance = distance_nm / EARTH_RADIUS_NM;

    let sin_lat1 = lat1_rad.sin();
    let cos_lat1 = lat1_rad.cos();
    let sin_d = angular_distance.sin();
    let cos_d = angular_distance.cos();

    let lat2_rad = (sin_lat1 * cos_d + cos_lat1 * sin_d * bearing_rad.cos()).asin();
    let lon2_rad =
        lon1_rad + (bearing_rad.sin() * sin_d * cos_lat1).atan2(cos_d - sin_lat1 * lat2_rad.sin());

    let lat2 = lat2_rad * RAD_TO_DEG;
    let mut lon2 = lon2_rad * RAD_TO_DEG;

    if lon2 > 180.0 {
        lon2 -= 360.0;
    } else if lon2 < -180.0 {
        lon2 += 360.0;
    }

    (lat2, lon2)
}

/// Normalize a bearing to the range [0, 360) degrees.
///
/// # Example
///
/// ```
/// use aeroquery::navigation::normalize_bearing;
///
/// assert_eq!(normalize_bearing(360.0), 0.0);
/// assert_eq!(normalize_bearing(-90.0), 270.0);
/// assert_eq!(normalize_bearing(450.0), 90.0);
/// ```
pub fn normalize_bearing(bearing: f64) -> f64 {
    let b = bearing.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if b >= 360.0 {
        0.0
    } else {
        b
    }
}

/// Distance and bearings between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Great-circle distance in nautical miles
    pub distance_nm: f64,
    /// Initial true bearing leaving the first position
    pub initial_bearing_deg: f64,
    /// True bearing on arrival at the second position
    pub final_bearing_deg: f64,
}

impl Measurement {
    /// Measure from `from` to `to`.
    pub fn between(from: LatLon, to: LatLon) -> Self {
        let (a, b) = (from.as_tuple(), to.as_tuple());
        Self {
            distance_nm: distance_nm(a, b),
            initial_bearing_deg: initial_bearing_deg(a, b),
            final_bearing_deg: final_bearing_deg(a, b),
        }
    }

    /// Distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_nm * KM_PER_NM
    }

    /// Distance in statute miles.
    pub fn distance_sm(&self) -> f64 {
        self.distance_nm * SM_PER_NM
    }
}

impl LatLon {
    /// Great-circle distance to another position in nautical miles.
    pub fn distance_nm_to(&self, other: &LatLon) -> f64 {
        distance_nm(self.as_tuple(), other.as_tuple())
    }

    /// Initial true bearing toward another position.
    pub fn bearing_to(&self, other: &LatLon) -> f64 {
        initial_bearing_deg(self.as_tuple(), other.as_tuple())
    }
}

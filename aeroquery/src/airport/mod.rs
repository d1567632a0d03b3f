//! Airport features and the lookup index built over them.
//!
//! An [`Airport`] is an immutable point feature: a position plus a flat,
//! fully optional set of [`Properties`]. Collections are usually loaded from
//! a GeoJSON `FeatureCollection` and handed to a [`FeatureIndex`].
//!
//! # Example
//!
//! ```
//! use aeroquery::airport::{load_geojson_str, ExactField, FeatureIndex};
//!
//! let json = r#"{
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "geometry": { "type": "Point", "coordinates": [-73.7789, 40.6398] },
//!         "properties": { "icao": "KJFK", "city": "New York", "size": 4000 }
//!     }]
//! }"#;
//!
//! let index = FeatureIndex::from_features(load_geojson_str(json)?);
//! let jfk = index.by_exact_code(ExactField::Icao, "kjfk").unwrap();
//! assert_eq!(jfk.properties.city.as_deref(), Some("New York"));
//! # Ok::<(), aeroquery::airport::LoadError>(())
//! ```

mod field;
mod geojson;
mod index;
mod lenient;

pub use field::{normalize_key, ExactField, GroupField, UnknownFieldError};
pub use geojson::{load_geojson_path, load_geojson_reader, load_geojson_str, LoadError};
pub use index::FeatureIndex;

use serde::Deserialize;

use crate::coord::LatLon;

/// Named attributes of an airport feature.
///
/// Every field is optional. Text fields that are empty or whitespace are
/// treated as absent. Numeric fields accept numbers or numeric strings; any
/// other value is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Properties {
    /// ICAO code, unique per collection by convention
    #[serde(deserialize_with = "lenient::text")]
    pub icao: Option<String>,
    /// IATA code, unique per collection by convention
    #[serde(deserialize_with = "lenient::text")]
    pub iata: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub country: Option<String>,
    /// Category such as civil, military or water
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    /// Numeric size driving the small/medium/large bucket
    #[serde(deserialize_with = "lenient::number")]
    pub size: Option<f64>,
    /// Surface type, string or numeric code rendered as text
    #[serde(deserialize_with = "lenient::text")]
    pub surface_type: Option<String>,
    /// Services code, compared literally
    #[serde(deserialize_with = "lenient::text")]
    pub services: Option<String>,
    /// Longest runway length
    #[serde(deserialize_with = "lenient::number")]
    pub longest_rwy: Option<f64>,
    /// Elevation
    #[serde(deserialize_with = "lenient::number")]
    pub elev: Option<f64>,
}

impl Properties {
    /// Size used for bucketing; missing sizes count as zero.
    pub fn size_or_zero(&self) -> f64 {
        self.size.unwrap_or(0.0)
    }

    /// Value of an exact-match field.
    pub fn exact_value(&self, field: ExactField) -> Option<&str> {
        match field {
            ExactField::Icao => self.icao.as_deref(),
            ExactField::Iata => self.iata.as_deref(),
        }
    }

    /// Value of a grouping field.
    pub fn group_value(&self, field: GroupField) -> Option<&str> {
        match field {
            GroupField::City => self.city.as_deref(),
            GroupField::Country => self.country.as_deref(),
            GroupField::State => self.state.as_deref(),
            GroupField::SurfaceType => self.surface_type.as_deref(),
            GroupField::Type => self.kind.as_deref(),
        }
    }

    /// Whether name, city, country, ICAO or IATA contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub fn contains_text(&self, needle: &str) -> bool {
        [
            &self.name,
            &self.city,
            &self.country,
            &self.icao,
            &self.iata,
        ]
        .into_iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(needle))
    }
}

/// A point feature: position plus properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// Location in decimal degrees
    pub position: LatLon,
    /// Named attributes
    pub properties: Properties,
}

impl Airport {
    /// Create an airport with the given properties.
    pub fn new(position: LatLon, properties: Properties) -> Self {
        Self {
            position,
            properties,
        }
    }

    /// GeoJSON-order geometry, `(longitude, latitude)`.
    pub fn geometry(&self) -> (f64, f64) {
        (self.position.lon, self.position.lat)
    }

    /// Display label: ICAO code, else IATA code, else name.
    pub fn label(&self) -> &str {
        let p = &self.properties;
        p.icao
            .as_deref()
            .or(p.iata.as_deref())
            .or(p.name.as_deref())
            .unwrap_or("?")
    }
}

//! Multi-criteria airport queries.
//!
//! A [`QuerySpec`] describes what the caller wants; a [`FilterEvaluator`]
//! resolves it against a built [`FeatureIndex`](crate::airport::FeatureIndex).
//!
//! Evaluation runs in a fixed order:
//!
//! 1. Base set from the free-text query (exact ICAO, exact IATA, city,
//!    country, then a substring scan)
//! 2. Categorical selections: country, state, type, surface, services
//! 3. Size bucket
//! 4. Runway length range
//! 5. Radius around a code or coordinate
//!
//! Stages with nothing selected pass every candidate through. Stages never
//! reorder candidates.
//!
//! # Example
//!
//! ```
//! use aeroquery::airport::{Airport, FeatureIndex, Properties};
//! use aeroquery::coord::LatLon;
//! use aeroquery::query::{QuerySpec, SizeBucket};
//!
//! let jfk = Airport::new(
//!     LatLon::new(40.6398, -73.7789),
//!     Properties { icao: Some("KJFK".into()), size: Some(4000.0), ..Default::default() },
//! );
//! let index = FeatureIndex::from_features(vec![jfk]);
//!
//! let spec = QuerySpec::new().with_sizes([SizeBucket::Large]);
//! assert_eq!(index.filter(&spec).len(), 1);
//! ```

mod filter;
mod size;

pub use filter::FilterEvaluator;
pub use size::{SizeBucket, UnknownSizeError};

/// Radius filter: a centre (ICAO code or coordinate text) and a distance.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusFilter {
    /// ICAO code or free-form coordinate text
    pub center: String,
    /// Radius in nautical miles; non-positive values disable the filter
    pub radius_nm: f64,
}

/// Filter intent for one query.
///
/// All fields are optional; an empty spec selects every feature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    /// Free-text query
    pub text: String,
    /// Selected countries (case-insensitive)
    pub countries: Vec<String>,
    /// Selected states (case-insensitive)
    pub states: Vec<String>,
    /// Selected airport types (case-insensitive)
    pub types: Vec<String>,
    /// Selected surface types (case-insensitive)
    pub surfaces: Vec<String>,
    /// Selected service codes (exact match)
    pub services: Vec<String>,
    /// Selected size buckets
    pub sizes: Vec<SizeBucket>,
    /// Minimum longest-runway length, inclusive
    pub rwy_min: Option<f64>,
    /// Maximum longest-runway length, inclusive
    pub rwy_max: Option<f64>,
    /// Optional radius filter
    pub radius: Option<RadiusFilter>,
}

impl QuerySpec {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_countries<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_states<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_types<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_surfaces<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.surfaces = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_services<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = SizeBucket>,
    {
        self.sizes = values.into_iter().collect();
        self
    }

    /// Set the inclusive runway length range; either bound may be open.
    pub fn with_runway_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.rwy_min = min;
        self.rwy_max = max;
        self
    }

    /// Keep only features within `radius_nm` of `center`.
    pub fn with_radius(mut self, center: impl Into<String>, radius_nm: f64) -> Self {
        self.radius = Some(RadiusFilter {
            center: center.into(),
            radius_nm,
        });
        self
    }

    /// Whether any stage after the base set would do anything.
    pub fn has_selections(&self) -> bool {
        !self.countries.is_empty()
            || !self.states.is_empty()
            || !self.types.is_empty()
            || !self.surfaces.is_empty()
            || !self.services.is_empty()
            || !self.sizes.is_empty()
            || self.rwy_min.is_some()
            || self.rwy_max.is_some()
            || self.radius.is_some()
    }
}

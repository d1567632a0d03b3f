//! AeroQuery - airport search and great-circle navigation
//!
//! This library indexes a GeoJSON collection of airports and answers
//! multi-criteria queries against it: free text, categorical selections,
//! size buckets, runway length and radius around a code or coordinate.
//!
//! # Overview
//!
//! - [`airport`]: feature model, GeoJSON loading and the [`airport::FeatureIndex`]
//! - [`query`]: [`query::QuerySpec`] and the [`query::FilterEvaluator`]
//! - [`coord`]: free-form coordinate parsing (decimal and DMS)
//! - [`navigation`]: great-circle distance and bearings
//!
//! ```
//! use aeroquery::airport::{load_geojson_str, FeatureIndex};
//! use aeroquery::query::QuerySpec;
//!
//! let json = r#"{"type": "FeatureCollection", "features": [
//!     {"type": "Feature",
//!      "geometry": {"type": "Point", "coordinates": [-71.0052, 42.3643]},
//!      "properties": {"icao": "KBOS", "city": "Boston", "country": "USA"}}
//! ]}"#;
//!
//! let index = FeatureIndex::from_features(load_geojson_str(json)?);
//! let results = index.filter(&QuerySpec::new().with_text("boston"));
//! assert_eq!(results[0].label(), "KBOS");
//! # Ok::<(), aeroquery::airport::LoadError>(())
//! ```

pub mod airport;
pub mod config;
pub mod coord;
pub mod logging;
pub mod navigation;
pub mod query;

/// Version of the AeroQuery library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

//! GeoJSON loading for airport feature collections.
//!
//! Expects a `FeatureCollection` of `Point` features:
//!
//! ```text
//! { "type": "FeatureCollection",
//!   "features": [
//!     { "type": "Feature",
//!       "geometry": { "type": "Point", "coordinates": [lon, lat] },
//!       "properties": { "icao": "KJFK", ... } } ] }
//! ```
//!
//! Loading is forgiving: a missing or non-array `features` member yields an
//! empty collection, and features without a valid point geometry are skipped
//! with a warning.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{Airport, Properties};
use crate::coord::LatLon;

/// Error type for feature collection loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Feature collection not found at: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load airports from a GeoJSON file.
///
/// Supports both plain `.geojson`/`.json` and gzip compressed `.gz` files.
pub fn load_geojson_path<P: AsRef<Path>>(path: P) -> Result<Vec<Airport>, LoadError> {
    use flate2::read::GzDecoder;

    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;

    if path.extension().is_some_and(|ext| ext == "gz") {
        tracing::debug!(path = %path.display(), "Loading gzip compressed feature collection");
        load_geojson_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        tracing::debug!(path = %path.display(), "Loading feature collection");
        load_geojson_reader(BufReader::new(file))
    }
}

/// Load airports from a reader producing GeoJSON text.
pub fn load_geojson_reader<R: Read>(reader: R) -> Result<Vec<Airport>, LoadError> {
    let document: Value = serde_json::from_reader(reader)?;
    Ok(airports_from_document(document))
}

/// Load airports from GeoJSON text.
pub fn load_geojson_str(json: &str) -> Result<Vec<Airport>, LoadError> {
    let document: Value = serde_json::from_str(json)?;
    Ok(airports_from_document(document))
}

fn airports_from_document(document: Value) -> Vec<Airport> {
    let features = match document {
        Value::Object(mut collection) => collection.remove("features"),
        // A bare array of features is accepted as well
        array @ Value::Array(_) => Some(array),
        _ => None,
    };

    let Some(Value::Array(features)) = features else {
        tracing::warn!("GeoJSON document has no feature array, treating as empty");
        return Vec::new();
    };

    let total = features.len();
    let airports: Vec<Airport> = features
        .into_iter()
        .enumerate()
        .filter_map(|(position, feature)| {
            let airport = airport_from_feature(feature);
            if airport.is_none() {
                tracing::warn!(position, "Skipping feature without a valid point geometry");
            }
            airport
        })
        .collect();

    tracing::debug!(
        loaded = airports.len(),
        skipped = total - airports.len(),
        "Parsed feature collection"
    );

    airports
}

fn airport_from_feature(feature: Value) -> Option<Airport> {
    let Value::Object(mut feature) = feature else {
        return None;
    };

    let position = point_position(feature.get("geometry")?)?;
    let properties = match feature.remove("properties") {
        Some(props @ Value::Object(_)) => serde_json::from_value::<Properties>(props)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring malformed feature properties");
                Properties::default()
            }),
        _ => Properties::default(),
    };

    Some(Airport::new(position, properties))
}

/// Extract `[lon, lat]` from a Point geometry and validate the range.
fn point_position(geometry: &Value) -> Option<LatLon> {
    if geometry.get("type")?.as_str()? != "Point" {
        return None;
    }
    let coordinates = geometry.get("coordinates")?.as_array()?;
    let lon = coordinates.first()?.as_f64()?;
    let lat = coordinates.get(1)?.as_f64()?;
    LatLon::checked(lat, lon).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-73.7789, 40.6398] },
                "properties": {
                    "icao": "KJFK", "iata": "JFK", "name": "John F Kennedy Intl",
                    "city": "New York", "state": "NY", "country": "USA",
                    "type": "civil", "size": "4000", "surfaceType": 1,
                    "services": 3, "longestRwy": 14511, "elev": 13
                }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-71.0052, 42.3643] },
                "properties": { "icao": "KBOS", "size": "big", "longestRwy": null }
            }
        ]
    }"#;

    #[test]
    fn test_parses_properties_leniently() {
        let airports = load_geojson_str(SAMPLE).unwrap();
        assert_eq!(airports.len(), 2);

        let jfk = &airports[0].properties;
        assert_eq!(jfk.icao.as_deref(), Some("KJFK"));
        assert_eq!(jfk.kind.as_deref(), Some("civil"));
        assert_eq!(jfk.size, Some(4000.0));
        assert_eq!(jfk.surface_type.as_deref(), Some("1"));
        assert_eq!(jfk.services.as_deref(), Some("3"));
        assert_eq!(jfk.longest_rwy, Some(14511.0));
        assert_eq!(jfk.elev, Some(13.0));
        assert_eq!(airports[0].position, LatLon::new(40.6398, -73.7789));

        let bos = &airports[1].properties;
        assert_eq!(bos.size, None);
        assert_eq!(bos.longest_rwy, None);
        assert_eq!(bos.city, None);
    }

    #[test]
    fn test_missing_features_is_empty() {
        assert!(load_geojson_str(r#"{"type": "FeatureCollection"}"#)
            .unwrap()
            .is_empty());
        assert!(load_geojson_str(r#"{"features": {"not": "an array"}}"#)
            .unwrap()
            .is_empty());
        assert!(load_geojson_str("42").unwrap().is_empty());
    }

    #[test]
    fn test_bare_feature_array() {
        let json = r#"[{"geometry": {"type": "Point", "coordinates": [1.3678, 43.6294]}}]"#;
        let airports = load_geojson_str(json).unwrap();
        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].properties, Properties::default());
    }

    #[test]
    fn test_invalid_geometry_skipped() {
        let json = r#"{"features": [
            {"geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}},
            {"geometry": {"type": "Point", "coordinates": [0, 95]}},
            {"geometry": {"type": "Point", "coordinates": [181, 0]}},
            {"geometry": {"type": "Point", "coordinates": ["x", 0]}},
            {"geometry": null},
            "not a feature",
            {"geometry": {"type": "Point", "coordinates": [2.5479, 49.0097]}}
        ]}"#;
        let airports = load_geojson_str(json).unwrap();
        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].position, LatLon::new(49.0097, 2.5479));
    }

    #[test]
    fn test_non_object_properties_default() {
        let json = r#"{"features": [
            {"geometry": {"type": "Point", "coordinates": [0, 0]}, "properties": [1, 2]}
        ]}"#;
        let airports = load_geojson_str(json).unwrap();
        assert_eq!(airports[0].properties, Properties::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            load_geojson_str("{ not json"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_not_found_error() {
        let result = load_geojson_path("/nonexistent/path/airports.geojson");
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_loads_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("airports.geojson");
        std::fs::write(&path, SAMPLE).unwrap();

        let airports = load_geojson_path(&path).unwrap();
        assert_eq!(airports.len(), 2);
    }

    #[test]
    fn test_loads_gzip_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("airports.geojson.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let airports = load_geojson_path(&path).unwrap();
        assert_eq!(airports.len(), 2);
        assert_eq!(airports[1].properties.icao.as_deref(), Some("KBOS"));
    }
}

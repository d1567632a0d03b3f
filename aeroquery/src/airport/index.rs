//! Feature index for exact-code and grouped-value lookup.

use std::collections::{BTreeMap, HashMap};

use super::field::{normalize_key, ExactField, GroupField};
use super::Airport;
use crate::coord::{parse_coordinates, CoordParseError, LatLon};
use crate::query::{FilterEvaluator, QuerySpec};

/// Lookup tables derived from one feature collection.
///
/// Tables hold positions into `features`. Grouping tables are ordered maps,
/// so their keys double as the sorted enumeration of known values.
#[derive(Debug, Default)]
struct IndexTables {
    features: Vec<Airport>,
    by_icao: HashMap<String, usize>,
    by_iata: HashMap<String, usize>,
    by_city: BTreeMap<String, Vec<usize>>,
    by_country: BTreeMap<String, Vec<usize>>,
    by_state: BTreeMap<String, Vec<usize>>,
    by_surface_type: BTreeMap<String, Vec<usize>>,
    by_type: BTreeMap<String, Vec<usize>>,
}

impl IndexTables {
    fn exact(&self, field: ExactField) -> &HashMap<String, usize> {
        match field {
            ExactField::Icao => &self.by_icao,
            ExactField::Iata => &self.by_iata,
        }
    }

    fn exact_mut(&mut self, field: ExactField) -> &mut HashMap<String, usize> {
        match field {
            ExactField::Icao => &mut self.by_icao,
            ExactField::Iata => &mut self.by_iata,
        }
    }

    fn group(&self, field: GroupField) -> &BTreeMap<String, Vec<usize>> {
        match field {
            GroupField::City => &self.by_city,
            GroupField::Country => &self.by_country,
            GroupField::State => &self.by_state,
            GroupField::SurfaceType => &self.by_surface_type,
            GroupField::Type => &self.by_type,
        }
    }

    fn group_mut(&mut self, field: GroupField) -> &mut BTreeMap<String, Vec<usize>> {
        match field {
            GroupField::City => &mut self.by_city,
            GroupField::Country => &mut self.by_country,
            GroupField::State => &mut self.by_state,
            GroupField::SurfaceType => &mut self.by_surface_type,
            GroupField::Type => &mut self.by_type,
        }
    }

    fn from_features(features: Vec<Airport>) -> Self {
        let mut tables = Self::default();

        for (position, airport) in features.iter().enumerate() {
            let props = &airport.properties;

            for field in [ExactField::Icao, ExactField::Iata] {
                if let Some(key) = props.exact_value(field).and_then(normalize_key) {
                    // Later features replace earlier ones with the same code
                    tables.exact_mut(field).insert(key, position);
                }
            }

            for field in GroupField::ALL {
                if let Some(key) = props.group_value(field).and_then(normalize_key) {
                    tables.group_mut(field).entry(key).or_default().push(position);
                }
            }
        }

        tables.features = features;
        tables
    }
}

/// Index of airport features.
///
/// Holds the full collection in its original order, one exact-match table per
/// code field (ICAO, IATA) and one multi-value table per grouping field. All
/// keys are trimmed and lowercased.
///
/// The index starts out unbuilt: lookups find nothing and filtering returns
/// no results until [`FeatureIndex::build`] has run.
#[derive(Debug, Default)]
pub struct FeatureIndex {
    tables: Option<IndexTables>,
}

impl FeatureIndex {
    /// Create an empty, unbuilt index.
    pub fn new() -> Self {
        Self { tables: None }
    }

    /// Create an index and build it from `features`.
    pub fn from_features<I>(features: I) -> Self
    where
        I: IntoIterator<Item = Airport>,
    {
        let mut index = Self::new();
        index.build(features);
        index
    }

    /// Replace the whole index with tables built from `features`.
    ///
    /// Nothing from a previous build survives. The new tables are assembled
    /// off to the side and swapped in with a single assignment.
    pub fn build<I>(&mut self, features: I)
    where
        I: IntoIterator<Item = Airport>,
    {
        let tables = IndexTables::from_features(features.into_iter().collect());

        tracing::info!(
            features = tables.features.len(),
            icao_codes = tables.by_icao.len(),
            iata_codes = tables.by_iata.len(),
            cities = tables.by_city.len(),
            countries = tables.by_country.len(),
            states = tables.by_state.len(),
            "Built airport feature index"
        );

        self.tables = Some(tables);
    }

    /// Whether [`build`](Self::build) has run at least once.
    pub fn is_ready(&self) -> bool {
        self.tables.is_some()
    }

    /// Returns the number of indexed features.
    pub fn len(&self) -> usize {
        self.features().len()
    }

    /// Returns true if no features are indexed.
    pub fn is_empty(&self) -> bool {
        self.features().is_empty()
    }

    /// All features in collection order.
    pub fn features(&self) -> &[Airport] {
        match &self.tables {
            Some(tables) => &tables.features,
            None => &[],
        }
    }

    /// Look up the feature owning `key` in an exact-match table.
    ///
    /// Returns `None` if the key is unknown or the index is not built.
    pub fn lookup_exact(&self, field: ExactField, key: &str) -> Option<&Airport> {
        let tables = self.tables.as_ref()?;
        let key = normalize_key(key)?;
        tables
            .exact(field)
            .get(&key)
            .map(|&position| &tables.features[position])
    }

    /// Look up every feature sharing `key` in a grouping table, in collection order.
    ///
    /// Returns `None` if no feature has that value.
    pub fn lookup_group(&self, field: GroupField, key: &str) -> Option<Vec<&Airport>> {
        let tables = self.tables.as_ref()?;
        let key = normalize_key(key)?;
        tables.group(field).get(&key).map(|positions| {
            positions
                .iter()
                .map(|&position| &tables.features[position])
                .collect()
        })
    }

    /// Find a single feature by code, e.g. to check for a duplicate ICAO.
    pub fn by_exact_code(&self, field: ExactField, code: &str) -> Option<&Airport> {
        self.lookup_exact(field, code)
    }

    /// Sorted, distinct, normalized values known for a grouping field.
    pub fn enumerate(&self, field: GroupField) -> Vec<&str> {
        self.tables.as_ref().map_or_else(Vec::new, |t| {
            t.group(field).keys().map(String::as_str).collect()
        })
    }

    /// Resolve text naming a place: an ICAO code first, then coordinate text.
    ///
    /// When neither works, returns the coordinate parser's error.
    pub fn resolve_point(&self, text: &str) -> Result<LatLon, CoordParseError> {
        if let Some(airport) = self.by_exact_code(ExactField::Icao, text) {
            return Ok(airport.position);
        }
        parse_coordinates(text)
    }

    /// Run a query with the default configuration.
    pub fn filter(&self, spec: &QuerySpec) -> Vec<&Airport> {
        FilterEvaluator::new(self).filter(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::Properties;

    fn airport(icao: &str, city: &str, country: &str) -> Airport {
        Airport::new(
            LatLon::new(0.0, 0.0),
            Properties {
                icao: Some(icao.to_string()),
                city: Some(city.to_string()),
                country: Some(country.to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_empty_index() {
        let index = FeatureIndex::new();
        assert!(!index.is_ready());
        assert!(index.is_empty());
        assert!(index.lookup_exact(ExactField::Icao, "KJFK").is_none());
        assert!(index.enumerate(GroupField::Country).is_empty());
    }

    #[test]
    fn test_build_empty_collection_is_ready() {
        let index = FeatureIndex::from_features(Vec::new());
        assert!(index.is_ready());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let index = FeatureIndex::from_features(vec![airport("LFBO", "Toulouse", "France")]);

        assert!(index.lookup_exact(ExactField::Icao, "LFBO").is_some());
        assert!(index.lookup_exact(ExactField::Icao, "lfbo").is_some());
        assert!(index.lookup_exact(ExactField::Icao, " LfBo ").is_some());
        assert!(index.lookup_group(GroupField::City, "TOULOUSE").is_some());
    }

    #[test]
    fn test_duplicate_icao_last_write_wins() {
        let mut first = airport("KXYZ", "Alpha", "USA");
        first.properties.name = Some("First".to_string());
        let mut second = airport("kxyz", "Beta", "USA");
        second.properties.name = Some("Second".to_string());

        let index = FeatureIndex::from_features(vec![first, second]);

        let found = index.by_exact_code(ExactField::Icao, "KXYZ").unwrap();
        assert_eq!(found.properties.name.as_deref(), Some("Second"));

        // Both still share the country bucket
        let usa = index.lookup_group(GroupField::Country, "usa").unwrap();
        assert_eq!(usa.len(), 2);
        assert_eq!(usa[0].properties.name.as_deref(), Some("First"));
    }

    #[test]
    fn test_group_preserves_collection_order() {
        let index = FeatureIndex::from_features(vec![
            airport("KJFK", "New York", "USA"),
            airport("EGLL", "London", "UK"),
            airport("KLGA", "New York", "USA"),
        ]);

        let ny: Vec<&str> = index
            .lookup_group(GroupField::City, "new york")
            .unwrap()
            .iter()
            .map(|a| a.label())
            .collect();
        assert_eq!(ny, vec!["KJFK", "KLGA"]);
    }

    #[test]
    fn test_missing_and_blank_fields_not_indexed() {
        let mut blank = airport("  ", "", "USA");
        blank.properties.state = None;
        let index = FeatureIndex::from_features(vec![blank]);

        assert!(index.lookup_exact(ExactField::Icao, "").is_none());
        assert!(index.enumerate(GroupField::City).is_empty());
        assert!(index.enumerate(GroupField::State).is_empty());
        assert_eq!(index.enumerate(GroupField::Country), vec!["usa"]);
    }

    #[test]
    fn test_enumerate_sorted_and_deduplicated() {
        let index = FeatureIndex::from_features(vec![
            airport("A", "x", "USA"),
            airport("B", "x", "France"),
            airport("C", "x", "usa"),
            airport("D", "x", " Canada "),
        ]);

        assert_eq!(
            index.enumerate(GroupField::Country),
            vec!["canada", "france", "usa"]
        );
    }

    #[test]
    fn test_rebuild_discards_previous_state() {
        let mut index = FeatureIndex::from_features(vec![airport("KJFK", "New York", "USA")]);
        index.build(vec![airport("EGLL", "London", "UK")]);

        assert_eq!(index.len(), 1);
        assert!(index.lookup_exact(ExactField::Icao, "KJFK").is_none());
        assert!(index.lookup_group(GroupField::Country, "usa").is_none());
        assert_eq!(index.enumerate(GroupField::Country), vec!["uk"]);
    }

    #[test]
    fn test_resolve_point_prefers_icao() {
        let mut jfk = airport("KJFK", "New York", "USA");
        jfk.position = LatLon::new(40.6398, -73.7789);
        let index = FeatureIndex::from_features(vec![jfk]);

        assert_eq!(
            index.resolve_point("kjfk"),
            Ok(LatLon::new(40.6398, -73.7789))
        );
        assert_eq!(index.resolve_point("10 20"), Ok(LatLon::new(10.0, 20.0)));
        assert_eq!(
            index.resolve_point("KZZZ"),
            Err(CoordParseError::TokenCount(1))
        );
    }
}

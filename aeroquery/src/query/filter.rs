//! Query evaluation against a built feature index.

use std::collections::HashSet;

use super::{QuerySpec, RadiusFilter, SizeBucket};
use crate::airport::{normalize_key, Airport, ExactField, FeatureIndex, GroupField};
use crate::config::QueryConfig;
use crate::coord::LatLon;

/// Resolves a [`QuerySpec`] to an ordered list of features.
///
/// Borrows the index; results borrow from it as well.
#[derive(Debug, Clone)]
pub struct FilterEvaluator<'a> {
    index: &'a FeatureIndex,
    config: QueryConfig,
}

impl<'a> FilterEvaluator<'a> {
    /// Create an evaluator with the default configuration.
    pub fn new(index: &'a FeatureIndex) -> Self {
        Self::with_config(index, QueryConfig::default())
    }

    /// Create an evaluator with a custom configuration.
    pub fn with_config(index: &'a FeatureIndex, config: QueryConfig) -> Self {
        Self { index, config }
    }

    /// Run the query.
    ///
    /// Returns features in collection order (or bucket order for a city or
    /// country hit), each at most once. An unbuilt index yields nothing.
    pub fn filter(&self, spec: &QuerySpec) -> Vec<&'a Airport> {
        if !self.index.is_ready() {
            tracing::debug!("Feature index not built, returning no results");
            return Vec::new();
        }

        let mut candidates = self.base_set(&spec.text);
        let base_count = candidates.len();

        let categorical = [
            (GroupField::Country, &spec.countries),
            (GroupField::State, &spec.states),
            (GroupField::Type, &spec.types),
            (GroupField::SurfaceType, &spec.surfaces),
        ];
        for (field, selected) in categorical {
            if let Some(keys) = selection_keys(selected) {
                candidates.retain(|a| {
                    a.properties
                        .group_value(field)
                        .and_then(normalize_key)
                        .is_some_and(|key| keys.contains(&key))
                });
            }
        }

        if !spec.services.is_empty() {
            candidates.retain(|a| {
                a.properties
                    .services
                    .as_deref()
                    .is_some_and(|code| spec.services.iter().any(|s| s == code))
            });
        }

        if !spec.sizes.is_empty() {
            candidates.retain(|a| {
                let bucket = SizeBucket::classify_with(a.properties.size_or_zero(), &self.config);
                spec.sizes.contains(&bucket)
            });
        }

        if let Some(min) = spec.rwy_min {
            candidates.retain(|a| a.properties.longest_rwy.is_some_and(|len| len >= min));
        }
        if let Some(max) = spec.rwy_max {
            candidates.retain(|a| a.properties.longest_rwy.is_some_and(|len| len <= max));
        }

        if let Some(radius) = &spec.radius {
            self.apply_radius(&mut candidates, radius);
        }

        tracing::debug!(
            query = %spec.text,
            base = base_count,
            matched = candidates.len(),
            "Evaluated airport query"
        );

        candidates
    }

    /// Resolve the base candidate set from free text.
    fn base_set(&self, text: &str) -> Vec<&'a Airport> {
        let index = self.index;
        let Some(q) = normalize_key(text) else {
            return index.features().iter().collect();
        };

        if let Some(airport) = index.lookup_exact(ExactField::Icao, &q) {
            return vec![airport];
        }
        if let Some(airport) = index.lookup_exact(ExactField::Iata, &q) {
            return vec![airport];
        }
        if let Some(airports) = index.lookup_group(GroupField::City, &q) {
            return airports;
        }
        if let Some(airports) = index.lookup_group(GroupField::Country, &q) {
            return airports;
        }

        index
            .features()
            .iter()
            .filter(|a| a.properties.contains_text(&q))
            .collect()
    }

    /// Drop candidates farther than the radius from the resolved centre.
    ///
    /// An unresolvable centre or a non-positive radius leaves the candidates
    /// untouched.
    fn apply_radius(&self, candidates: &mut Vec<&'a Airport>, radius: &RadiusFilter) {
        if !(radius.radius_nm.is_finite() && radius.radius_nm > 0.0) {
            return;
        }

        let Some(center) = self.resolve_center(&radius.center) else {
            tracing::debug!(
                center = %radius.center,
                "Radius centre did not resolve, skipping radius filter"
            );
            return;
        };

        candidates.retain(|a| center.distance_nm_to(&a.position) <= radius.radius_nm);
    }

    fn resolve_center(&self, text: &str) -> Option<LatLon> {
        normalize_key(text)?;
        self.index.resolve_point(text).ok()
    }
}

/// Normalized selection set, or `None` when the stage has nothing selected.
fn selection_keys(selected: &[String]) -> Option<HashSet<String>> {
    let keys: HashSet<String> = selected.iter().filter_map(|s| normalize_key(s)).collect();
    (!keys.is_empty()).then_some(keys)
}

//! Query engine configuration.

use super::defaults::{
    DEFAULT_LARGE_MIN_SIZE, DEFAULT_MEDIUM_MIN_SIZE, DEFAULT_RADIUS_NM, DEFAULT_RESULT_LIMIT,
};

/// Tunables for query evaluation and presentation.
///
/// # Example
///
/// ```
/// use aeroquery::config::QueryConfig;
///
/// // Using defaults
/// let config = QueryConfig::default();
/// assert_eq!(config.medium_min_size(), 1000.0);
/// assert_eq!(config.large_min_size(), 3500.0);
///
/// // Custom configuration
/// let config = QueryConfig::new()
///     .with_medium_min_size(500.0)
///     .with_large_min_size(2000.0);
/// assert_eq!(config.large_min_size(), 2000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryConfig {
    /// Smallest size classified as medium
    medium_min_size: f64,
    /// Smallest size classified as large
    large_min_size: f64,
    /// Radius used when only a centre is given (nautical miles)
    default_radius_nm: f64,
    /// Maximum number of results presented
    result_limit: usize,
}

impl QueryConfig {
    /// Create a new query configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound of the medium size bucket.
    ///
    /// Default: 1000.
    pub fn with_medium_min_size(mut self, size: f64) -> Self {
        self.medium_min_size = size;
        self
    }

    /// Set the lower bound of the large size bucket.
    ///
    /// Default: 3500.
    pub fn with_large_min_size(mut self, size: f64) -> Self {
        self.large_min_size = size;
        self
    }

    /// Set the radius applied when a search gives a centre but no distance.
    pub fn with_default_radius_nm(mut self, radius_nm: f64) -> Self {
        self.default_radius_nm = radius_nm;
        self
    }

    /// Set the maximum number of results presented.
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn medium_min_size(&self) -> f64 {
        self.medium_min_size
    }

    pub fn large_min_size(&self) -> f64 {
        self.large_min_size
    }

    pub fn default_radius_nm(&self) -> f64 {
        self.default_radius_nm
    }

    pub fn result_limit(&self) -> usize {
        self.result_limit
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            medium_min_size: DEFAULT_MEDIUM_MIN_SIZE,
            large_min_size: DEFAULT_LARGE_MIN_SIZE,
            default_radius_nm: DEFAULT_RADIUS_NM,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QueryConfig::default();
        assert_eq!(config.medium_min_size(), DEFAULT_MEDIUM_MIN_SIZE);
        assert_eq!(config.large_min_size(), DEFAULT_LARGE_MIN_SIZE);
        assert_eq!(config.default_radius_nm(), DEFAULT_RADIUS_NM);
        assert_eq!(config.result_limit(), DEFAULT_RESULT_LIMIT);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(QueryConfig::new(), QueryConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = QueryConfig::new()
            .with_default_radius_nm(100.0)
            .with_result_limit(5);
        assert_eq!(config.default_radius_nm(), 100.0);
        assert_eq!(config.result_limit(), 5);
        assert_eq!(config.medium_min_size(), DEFAULT_MEDIUM_MIN_SIZE); // Unchanged
    }
}

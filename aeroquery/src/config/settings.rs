//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::path::PathBuf;

use super::query::QueryConfig;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Data source settings
    pub data: DataSettings,
    /// Query engine settings
    pub query: QuerySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Data source configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSettings {
    /// GeoJSON feature collection (plain or `.gz`)
    pub airports: Option<PathBuf>,
}

/// Query engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySettings {
    /// Smallest size classified as medium
    pub medium_min_size: f64,
    /// Smallest size classified as large
    pub large_min_size: f64,
    /// Radius applied when a centre is given without a distance
    pub default_radius_nm: f64,
    /// Maximum number of results printed
    pub result_limit: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory holding the log file
    pub directory: PathBuf,
    /// Log file name
    pub file: String,
}

impl ConfigFile {
    /// Build the engine configuration from the `[query]` section.
    pub fn query_config(&self) -> QueryConfig {
        QueryConfig::new()
            .with_medium_min_size(self.query.medium_min_size)
            .with_large_min_size(self.query.large_min_size)
            .with_default_radius_nm(self.query.default_radius_nm)
            .with_result_limit(self.query.result_limit)
    }
}

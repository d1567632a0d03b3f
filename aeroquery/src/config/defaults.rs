//! Default values for all configuration settings.

use super::file::config_directory;
use super::settings::*;

/// Smallest `size` classified as a medium airport.
pub const DEFAULT_MEDIUM_MIN_SIZE: f64 = 1000.0;

/// Smallest `size` classified as a large airport.
pub const DEFAULT_LARGE_MIN_SIZE: f64 = 3500.0;

/// Radius used when a search names a centre but no distance (nautical miles).
pub const DEFAULT_RADIUS_NM: f64 = 25.0;

/// Maximum number of results the CLI prints.
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// Log file name inside the log directory.
pub const DEFAULT_LOG_FILE: &str = "aeroquery.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            data: DataSettings { airports: None },
            query: QuerySettings {
                medium_min_size: DEFAULT_MEDIUM_MIN_SIZE,
                large_min_size: DEFAULT_LARGE_MIN_SIZE,
                default_radius_nm: DEFAULT_RADIUS_NM,
                result_limit: DEFAULT_RESULT_LIMIT,
            },
            logging: LoggingSettings {
                directory: config_directory(),
                file: DEFAULT_LOG_FILE.to_string(),
            },
        }
    }
}

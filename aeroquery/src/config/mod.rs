//! Configuration for the query engine and the user config file.
//!
//! [`QueryConfig`] groups the engine's tunables. [`ConfigFile`] is the
//! `~/.aeroquery/config.ini` file that feeds it.
//!
//! # Example
//!
//! ```
//! use aeroquery::config::QueryConfig;
//!
//! let config = QueryConfig::new()
//!     .with_default_radius_nm(50.0)
//!     .with_result_limit(10);
//! assert_eq!(config.large_min_size(), 3500.0);
//! ```

mod defaults;
mod file;
mod parser;
mod query;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_LARGE_MIN_SIZE, DEFAULT_LOG_FILE, DEFAULT_MEDIUM_MIN_SIZE, DEFAULT_RADIUS_NM,
    DEFAULT_RESULT_LIMIT,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use query::QueryConfig;
pub use settings::{ConfigFile, DataSettings, LoggingSettings, QuerySettings};

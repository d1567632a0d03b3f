//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and airport data
//! loading to reduce duplication across command handlers.

use std::path::{Path, PathBuf};

use aeroquery::airport::{load_geojson_path, FeatureIndex};
use aeroquery::config::{ConfigFile, QueryConfig};
use aeroquery::coord::{parse_coordinates, LatLon};
use aeroquery::logging::{init_logging, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Global options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Airport data file overriding the config file
    pub data: Option<PathBuf>,
    /// Config file overriding ~/.aeroquery/config.ini
    pub config: Option<PathBuf>,
    /// Enable debug logging
    pub verbose: bool,
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    /// Airport data file from the command line
    data_override: Option<PathBuf>,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new(options: &GlobalOptions) -> Result<Self, CliError> {
        let config = match &options.config {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::load()?,
        };

        let level = if options.verbose { "debug" } else { "warn" };
        let logging_guard = init_logging(
            &config.logging.directory,
            &config.logging.file,
            level,
        )
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            data_override: options.data.clone(),
        })
    }

    /// Query engine settings from the config file.
    pub fn query_config(&self) -> QueryConfig {
        self.config.query_config()
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("AeroQuery v{}", aeroquery::VERSION);
        info!("AeroQuery CLI: {} command", command);
    }

    /// Airport data file: command line first, then config.
    pub fn data_path(&self) -> Option<&Path> {
        self.data_override
            .as_deref()
            .or(self.config.data.airports.as_deref())
    }

    /// Load and index the airport data file.
    pub fn load_index(&self) -> Result<FeatureIndex, CliError> {
        let path = self.data_path().ok_or(CliError::NoDataSource)?;
        load_index_from(path)
    }

    /// Load the index if a data file is configured.
    pub fn try_load_index(&self) -> Result<Option<FeatureIndex>, CliError> {
        self.data_path().map(load_index_from).transpose()
    }
}

fn load_index_from(path: &Path) -> Result<FeatureIndex, CliError> {
    let start = std::time::Instant::now();
    let airports = load_geojson_path(path).map_err(|error| CliError::Load {
        path: path.to_path_buf(),
        error,
    })?;

    let index = FeatureIndex::from_features(airports);
    info!(
        path = %path.display(),
        features = index.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Loaded airport data"
    );
    Ok(index)
}

/// Resolve text to a position: ICAO code when an index is available,
/// otherwise (or when the code is unknown) coordinate text.
pub fn resolve_place(index: Option<&FeatureIndex>, text: &str) -> Result<LatLon, CliError> {
    let resolved = match index {
        Some(index) => index.resolve_point(text),
        None => parse_coordinates(text),
    };
    resolved.map_err(|error| CliError::UnresolvedPlace {
        input: text.to_string(),
        error,
    })
}

//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use aeroquery::airport::LoadError;
use aeroquery::config::ConfigFileError;
use aeroquery::coord::CoordParseError;

/// Coordinate examples printed when a place does not resolve.
pub(crate) const COORDINATE_FORMS: &[(&str, &str)] = &[
    ("40.64 -73.78", "decimal degrees, latitude first"),
    ("40°38'23\"N 73°46'44\"W", "degrees, minutes, seconds"),
    ("N40.64 W73.78", "hemisphere letters attached"),
    ("N 40.64 73.78W", "one standalone hemisphere letter"),
];

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file error
    Config(ConfigFileError),
    /// No airport data file given on the command line or in the config
    NoDataSource,
    /// Failed to load the airport data file
    Load { path: PathBuf, error: LoadError },
    /// Code not present in the loaded data
    NotFound(String),
    /// Text is neither a known code nor a coordinate
    UnresolvedPlace {
        input: String,
        error: CoordParseError,
    },
    /// Invalid argument value
    InvalidArgument(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::NoDataSource => {
                eprintln!();
                eprintln!("Point aeroquery at a GeoJSON airport collection, either:");
                eprintln!("  1. On the command line: aeroquery --data airports.geojson ...");
                eprintln!("  2. In ~/.aeroquery/config.ini:");
                eprintln!("       [data]");
                eprintln!("       airports = /path/to/airports.geojson");
            }
            CliError::UnresolvedPlace { .. } => {
                eprintln!();
                eprintln!("Accepted forms include:");
                eprintln!("  {:<22} (ICAO code, needs airport data)", "KJFK");
                for (form, note) in COORDINATE_FORMS {
                    eprintln!("  {:<22} ({})", form, note);
                }
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::NoDataSource => write!(f, "No airport data file configured"),
            CliError::Load { path, error } => {
                write!(f, "Failed to load '{}': {}", path.display(), error)
            }
            CliError::NotFound(code) => write!(f, "No airport with code '{}'", code),
            CliError::UnresolvedPlace { input, error } => {
                write!(f, "Cannot resolve '{}' to a position: {}", input, error)
            }
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Load { error, .. } => Some(error),
            CliError::UnresolvedPlace { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CliError::NotFound("KZZZ".to_string()).to_string(),
            "No airport with code 'KZZZ'"
        );
        assert_eq!(
            CliError::NoDataSource.to_string(),
            "No airport data file configured"
        );
    }

    #[test]
    fn test_source_chain() {
        let err = CliError::UnresolvedPlace {
            input: "nowhere".to_string(),
            error: CoordParseError::TokenCount(1),
        };
        assert!(err.source().is_some());
        assert!(CliError::NoDataSource.source().is_none());
    }
}

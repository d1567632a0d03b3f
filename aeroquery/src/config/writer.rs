//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let airports = config
        .data
        .airports
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let log_directory = path_to_string(&config.logging.directory);

    format!(
        r#"[data]
; GeoJSON FeatureCollection of airports (plain or gzip compressed .gz)
; Can be overridden with --data on the command line
airports = {}

[query]
; Size thresholds: below medium_min_size is small, from large_min_size is large
medium_min_size = {}
large_min_size = {}
; Radius in nautical miles used when --near is given without --radius
default_radius_nm = {}
; Maximum number of results printed (default: 50)
result_limit = {}

[logging]
; Directory for the log file (default: ~/.aeroquery)
directory = {}
file = {}
"#,
        airports,
        config.query.medium_min_size,
        config.query.large_min_size,
        config.query.default_radius_nm,
        config.query.result_limit,
        log_directory,
        config.logging.file,
    )
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

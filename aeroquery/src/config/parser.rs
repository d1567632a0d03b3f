//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [data] section
    if let Some(section) = ini.section(Some("data")) {
        if let Some(v) = section.get("airports") {
            let v = v.trim();
            if !v.is_empty() {
                config.data.airports = Some(expand_tilde(v));
            }
        }
    }

    // [query] section
    if let Some(section) = ini.section(Some("query")) {
        if let Some(v) = section.get("medium_min_size") {
            config.query.medium_min_size = parse_non_negative("query", "medium_min_size", v)?;
        }
        if let Some(v) = section.get("large_min_size") {
            config.query.large_min_size = parse_non_negative("query", "large_min_size", v)?;
        }
        if config.query.medium_min_size > config.query.large_min_size {
            return Err(ConfigFileError::InvalidValue {
                section: "query".to_string(),
                key: "large_min_size".to_string(),
                value: config.query.large_min_size.to_string(),
                reason: "must not be smaller than medium_min_size".to_string(),
            });
        }
        if let Some(v) = section.get("default_radius_nm") {
            let radius = parse_non_negative("query", "default_radius_nm", v)?;
            if radius == 0.0 {
                return Err(ConfigFileError::InvalidValue {
                    section: "query".to_string(),
                    key: "default_radius_nm".to_string(),
                    value: v.to_string(),
                    reason: "must be greater than zero (nautical miles)".to_string(),
                });
            }
            config.query.default_radius_nm = radius;
        }
        if let Some(v) = section.get("result_limit") {
            config.query.result_limit = v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&limit| limit > 0)
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "query".to_string(),
                    key: "result_limit".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer".to_string(),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

fn parse_non_negative(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a non-negative number".to_string(),
        })
}

pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_partial_config() {
        let config = load(
            r#"
[query]
result_limit = 20
"#,
        )
        .unwrap();

        assert_eq!(config.query.result_limit, 20);
        assert_eq!(config.query.default_radius_nm, DEFAULT_RADIUS_NM);
        assert!(config.data.airports.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = load(
            r#"
[data]
airports = /data/airports.geojson

[query]
medium_min_size = 800
large_min_size = 3000.5
default_radius_nm = 12.5
result_limit = 7

[logging]
directory = /var/log/aeroquery
file = queries.log
"#,
        )
        .unwrap();

        assert_eq!(
            config.data.airports,
            Some(PathBuf::from("/data/airports.geojson"))
        );
        assert_eq!(config.query.medium_min_size, 800.0);
        assert_eq!(config.query.large_min_size, 3000.5);
        assert_eq!(config.query.default_radius_nm, 12.5);
        assert_eq!(config.query.result_limit, 7);
        assert_eq!(config.logging.directory, PathBuf::from("/var/log/aeroquery"));
        assert_eq!(config.logging.file, "queries.log");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = load(
            r#"
[data]
airports =

[logging]
file =
"#,
        )
        .unwrap();

        assert!(config.data.airports.is_none());
        assert_eq!(config.logging.file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_invalid_result_limit() {
        for value in ["zero", "0", "-3"] {
            let err = load(&format!("[query]\nresult_limit = {value}\n")).unwrap_err();
            assert!(err.to_string().contains("query.result_limit"));
            assert!(err.to_string().contains("positive integer"));
        }
    }

    #[test]
    fn test_invalid_radius() {
        let err = load("[query]\ndefault_radius_nm = 0\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "default_radius_nm"));

        let err = load("[query]\ndefault_radius_nm = far\n").unwrap_err();
        assert!(err.to_string().contains("non-negative number"));
    }

    #[test]
    fn test_thresholds_out_of_order() {
        let err = load("[query]\nmedium_min_size = 5000\n").unwrap_err();
        assert!(err.to_string().contains("medium_min_size"));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/data/airports.geojson");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("data/airports.geojson"));
        }

        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
    }
}

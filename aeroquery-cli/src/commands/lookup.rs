//! Lookup command - show one airport by code.

use aeroquery::airport::{Airport, ExactField};
use aeroquery::query::SizeBucket;

use super::common::{format_number, format_place};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the lookup command.
///
/// Tries the code as ICAO first, then as IATA.
pub fn run(runner: &CliRunner, code: &str) -> Result<(), CliError> {
    runner.log_startup("lookup");

    let query_config = runner.query_config();
    let index = runner.load_index()?;

    let airport = index
        .by_exact_code(ExactField::Icao, code)
        .or_else(|| index.by_exact_code(ExactField::Iata, code))
        .ok_or_else(|| CliError::NotFound(code.to_string()))?;

    let bucket = SizeBucket::classify_with(airport.properties.size_or_zero(), &query_config);
    for (label, value) in describe(airport, bucket) {
        println!("{:<14} {}", label, value);
    }

    Ok(())
}

fn describe(airport: &Airport, bucket: SizeBucket) -> Vec<(&'static str, String)> {
    let p = &airport.properties;
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    vec![
        ("ICAO:", text(&p.icao)),
        ("IATA:", text(&p.iata)),
        ("Name:", text(&p.name)),
        ("Location:", format_place(airport)),
        ("Position:", airport.position.to_string()),
        ("DMS:", airport.position.to_dms_string()),
        ("Elevation:", format_number(p.elev)),
        ("Type:", text(&p.kind)),
        ("Size:", format!("{} ({})", format_number(p.size), bucket)),
        ("Longest rwy:", format_number(p.longest_rwy)),
        ("Surface:", text(&p.surface_type)),
        ("Services:", text(&p.services)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeroquery::airport::Properties;
    use aeroquery::coord::LatLon;

    #[test]
    fn test_describe_fills_missing_with_dash() {
        let airport = Airport::new(
            LatLon::new(40.6398, -73.7789),
            Properties {
                icao: Some("KJFK".to_string()),
                size: Some(4000.0),
                ..Default::default()
            },
        );
        let rows = describe(&airport, SizeBucket::Large);

        assert_eq!(rows[0], ("ICAO:", "KJFK".to_string()));
        assert_eq!(rows[1], ("IATA:", "-".to_string()));
        assert!(rows.contains(&("Size:", "4000 (large)".to_string())));
    }
}

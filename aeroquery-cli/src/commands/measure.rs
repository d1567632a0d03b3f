//! Measure command - great-circle distance and bearings between two places.

use aeroquery::coord::LatLon;
use aeroquery::navigation::{project_position, Measurement};

use crate::error::CliError;
use crate::runner::{resolve_place, CliRunner};

/// Run the measure command.
///
/// Each place is an ICAO code (when airport data is configured) or
/// coordinate text.
pub fn run(runner: &CliRunner, from: &str, to: &str) -> Result<(), CliError> {
    runner.log_startup("measure");

    let index = runner.try_load_index()?;
    let origin = resolve_place(index.as_ref(), from)?;
    let destination = resolve_place(index.as_ref(), to)?;

    let measurement = Measurement::between(origin, destination);
    let midpoint = midpoint(origin, &measurement);

    println!("From:            {}  ({})", origin, origin.to_dms_string());
    println!("To:              {}  ({})", destination, destination.to_dms_string());
    println!(
        "Distance:        {:.1} nm / {:.1} km / {:.1} sm",
        measurement.distance_nm,
        measurement.distance_km(),
        measurement.distance_sm()
    );
    println!("Initial bearing: {:05.1}°", measurement.initial_bearing_deg);
    println!("Final bearing:   {:05.1}°", measurement.final_bearing_deg);
    println!("Midpoint:        {}", midpoint);

    Ok(())
}

/// Point halfway along the great circle.
fn midpoint(origin: LatLon, measurement: &Measurement) -> LatLon {
    LatLon::from(project_position(
        origin.as_tuple(),
        measurement.initial_bearing_deg,
        measurement.distance_nm / 2.0,
    ))
}

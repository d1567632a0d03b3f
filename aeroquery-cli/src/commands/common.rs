//! Output formatting shared across CLI commands.

use aeroquery::airport::Airport;

/// One-line summary: code columns, name, place and position.
pub fn format_airport_line(airport: &Airport) -> String {
    let p = &airport.properties;
    format!(
        "{:<6} {:<4} {:<40} {:<30} {}",
        p.icao.as_deref().unwrap_or("-"),
        p.iata.as_deref().unwrap_or("-"),
        p.name.as_deref().unwrap_or(""),
        format_place(airport),
        airport.position,
    )
}

/// "City, State, Country" with missing parts left out.
pub fn format_place(airport: &Airport) -> String {
    let p = &airport.properties;
    [p.city.as_deref(), p.state.as_deref(), p.country.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format an optional number without trailing zeros.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{:.0}", v),
        Some(v) => format!("{}", v),
        None => "-".to_string(),
    }
}

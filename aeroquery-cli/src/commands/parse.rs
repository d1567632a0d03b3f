//! Parse command - interpret free-form coordinate text.

use aeroquery::coord::parse_coordinates;

use crate::error::CliError;

/// Run the parse command.
pub fn run(text: &str) -> Result<(), CliError> {
    let position = parse_coordinates(text).map_err(|error| CliError::UnresolvedPlace {
        input: text.to_string(),
        error,
    })?;

    println!("Decimal: {}", position);
    println!("DMS:     {}", position.to_dms_string());

    Ok(())
}

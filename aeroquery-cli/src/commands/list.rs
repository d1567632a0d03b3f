//! List command - known values of a grouping field.

use aeroquery::airport::GroupField;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the list command.
pub fn run(runner: &CliRunner, field: GroupField) -> Result<(), CliError> {
    runner.log_startup("list");

    let index = runner.load_index()?;
    let values = index.enumerate(field);

    for value in &values {
        println!("{}", value);
    }
    println!("{} distinct {} value(s)", values.len(), field);

    Ok(())
}

//! AeroQuery CLI - Command-line interface
//!
//! This binary provides a command-line interface to the AeroQuery library.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use aeroquery::airport::GroupField;
use aeroquery::logging::init_console_logging;
use clap::{Parser, Subcommand};

use commands::search::SearchArgs;
use error::CliError;
use runner::{CliRunner, GlobalOptions};

#[derive(Parser)]
#[command(name = "aeroquery")]
#[command(version = aeroquery::VERSION)]
#[command(about = "Search airports and measure great-circle routes", long_about = None)]
struct Cli {
    /// GeoJSON airport collection (overrides [data] airports in config.ini)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file to use instead of ~/.aeroquery/config.ini
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search airports by text and filters
    Search(SearchArgs),

    /// Show one airport by ICAO or IATA code
    Lookup {
        /// ICAO or IATA code
        code: String,
    },

    /// List the known values of a field
    List {
        /// One of: countries, states, cities, types, surfaces
        field: GroupField,
    },

    /// Distance and bearings between two places
    Measure {
        /// Origin: ICAO code or coordinates
        from: String,
        /// Destination: ICAO code or coordinates
        to: String,
    },

    /// Parse coordinate text and print it in decimal and DMS form
    Parse {
        /// Coordinate text, e.g. "40°38'23\"N 73°46'44\"W"
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Parsing needs neither config nor data
    if let Commands::Parse { text } = &cli.command {
        init_console_logging(if cli.verbose { "debug" } else { "warn" });
        return commands::parse::run(&text.join(" "));
    }

    let options = GlobalOptions {
        data: cli.data,
        config: cli.config,
        verbose: cli.verbose,
    };
    let runner = CliRunner::new(&options)?;

    match cli.command {
        Commands::Search(args) => commands::search::run(&runner, args),
        Commands::Lookup { code } => commands::lookup::run(&runner, &code),
        Commands::List { field } => commands::list::run(&runner, field),
        Commands::Measure { from, to } => commands::measure::run(&runner, &from, &to),
        Commands::Parse { text } => commands::parse::run(&text.join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_joins_words() {
        let cli = Cli::parse_from(["aeroquery", "parse", "41.5", "-87.6"]);
        match cli.command {
            Commands::Parse { text } => assert_eq!(text.join(" "), "41.5 -87.6"),
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_list_field_parsed() {
        let cli = Cli::parse_from(["aeroquery", "list", "surfaces"]);
        assert!(matches!(
            cli.command,
            Commands::List {
                field: GroupField::SurfaceType
            }
        ));
    }

    #[test]
    fn test_global_data_flag_after_subcommand() {
        let cli = Cli::parse_from(["aeroquery", "lookup", "KJFK", "--data", "a.geojson"]);
        assert_eq!(cli.data, Some(PathBuf::from("a.geojson")));
    }
}

//! Search command - multi-criteria airport search.

use aeroquery::query::{FilterEvaluator, QuerySpec, SizeBucket};
use clap::Args;

use super::common::format_airport_line;
use crate::error::CliError;
use crate::runner::{resolve_place, CliRunner};

/// Arguments for the search command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free text: ICAO or IATA code, city, country, or part of a name
    pub query: Option<String>,

    /// Keep airports in these countries (repeatable or comma separated)
    #[arg(long = "country", value_delimiter = ',')]
    pub countries: Vec<String>,

    /// Keep airports in these states
    #[arg(long = "state", value_delimiter = ',')]
    pub states: Vec<String>,

    /// Keep airports of these types
    #[arg(long = "type", value_delimiter = ',')]
    pub types: Vec<String>,

    /// Keep airports with these surface types
    #[arg(long = "surface", value_delimiter = ',')]
    pub surfaces: Vec<String>,

    /// Keep airports with these service codes (exact match)
    #[arg(long = "service", value_delimiter = ',')]
    pub services: Vec<String>,

    /// Keep airports in these size buckets: small, medium, large
    #[arg(long = "size", value_delimiter = ',')]
    pub sizes: Vec<SizeBucket>,

    /// Minimum longest-runway length
    #[arg(long)]
    pub rwy_min: Option<f64>,

    /// Maximum longest-runway length
    #[arg(long)]
    pub rwy_max: Option<f64>,

    /// Keep airports near an ICAO code or coordinate
    #[arg(long)]
    pub near: Option<String>,

    /// Radius for --near in nautical miles (default from config)
    #[arg(long, requires = "near")]
    pub radius: Option<f64>,

    /// Maximum number of results printed (default from config)
    #[arg(long)]
    pub limit: Option<usize>,
}

impl SearchArgs {
    fn to_spec(&self, default_radius_nm: f64) -> QuerySpec {
        let mut spec = QuerySpec::new()
            .with_text(self.query.clone().unwrap_or_default())
            .with_countries(self.countries.iter().cloned())
            .with_states(self.states.iter().cloned())
            .with_types(self.types.iter().cloned())
            .with_surfaces(self.surfaces.iter().cloned())
            .with_services(self.services.iter().cloned())
            .with_sizes(self.sizes.iter().copied())
            .with_runway_range(self.rwy_min, self.rwy_max);

        if let Some(center) = &self.near {
            spec = spec.with_radius(center.clone(), self.radius.unwrap_or(default_radius_nm));
        }
        spec
    }
}

/// Run the search command.
pub fn run(runner: &CliRunner, args: SearchArgs) -> Result<(), CliError> {
    runner.log_startup("search");

    if let (Some(min), Some(max)) = (args.rwy_min, args.rwy_max) {
        if min > max {
            return Err(CliError::InvalidArgument(format!(
                "--rwy-min ({}) is greater than --rwy-max ({})",
                min, max
            )));
        }
    }

    let query_config = runner.query_config();
    let index = runner.load_index()?;
    let spec = args.to_spec(query_config.default_radius_nm());
    tracing::debug!(
        query = %spec.text,
        has_selections = spec.has_selections(),
        "Running airport search"
    );

    // The evaluator ignores an unresolvable centre; tell the user instead
    let center = match &args.near {
        Some(near) => Some(resolve_place(Some(&index), near)?),
        None => None,
    };

    let results = FilterEvaluator::with_config(&index, query_config).filter(&spec);
    let limit = args.limit.unwrap_or(query_config.result_limit());

    for airport in results.iter().take(limit) {
        match center {
            Some(center) => println!(
                "{}  {:>7.1} nm",
                format_airport_line(airport),
                center.distance_nm_to(&airport.position)
            ),
            None => println!("{}", format_airport_line(airport)),
        }
    }

    if results.len() > limit {
        println!("... {} more (use --limit to show more)", results.len() - limit);
    }
    println!("{} airport(s) matched", results.len());

    Ok(())
}

//! Command-line interface for ranking and searching a restaurant catalogue.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalogue;
mod error;
mod rank;
mod search;

pub use error::CliError;

use rank::{RankArgs, run_rank};
use search::{SearchArgs, run_search};

pub(crate) const ARG_RESTAURANTS: &str = "restaurants";
pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ENV_RANK_RESTAURANTS: &str = "TABLEFINDER_CMDS_RANK_RESTAURANTS";
pub(crate) const ENV_SEARCH_RESTAURANTS: &str = "TABLEFINDER_CMDS_SEARCH_RESTAURANTS";

/// Run the Tablefinder CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Search(args) => run_search(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tablefinder",
    about = "Find and rank restaurants from a JSON catalogue",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List restaurants nearest first from a reference position.
    Rank(RankArgs),
    /// Filter restaurants by name, cuisine or neighbourhood.
    Search(SearchArgs),
}

#[cfg(test)]
mod tests;

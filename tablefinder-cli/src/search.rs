//! Search command implementation for the Tablefinder CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tablefinder_core::{RankedEntity, search_restaurants};

use crate::catalogue::{ListingEntry, load_catalogue, require_existing, write_listing};
use crate::{ARG_RESTAURANTS, CliError, ENV_SEARCH_RESTAURANTS};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "search",
    long_about = "Filter a restaurant catalogue by a case-insensitive \
                 substring of the name, cuisine or neighbourhood. An empty \
                 query prints the whole catalogue.",
    about = "Search restaurants by name, cuisine or neighbourhood"
)]
#[ortho_config(prefix = "TABLEFINDER")]
pub(crate) struct SearchArgs {
    /// Text to look for.
    #[arg(value_name = "query")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Path to a JSON array of restaurants.
    #[arg(long = ARG_RESTAURANTS, value_name = "path")]
    #[serde(default)]
    pub(crate) restaurants: Option<Utf8PathBuf>,
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) query: String,
    pub(crate) restaurants: Utf8PathBuf,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let restaurants = args.restaurants.ok_or(CliError::MissingArgument {
            field: ARG_RESTAURANTS,
            env: ENV_SEARCH_RESTAURANTS,
        })?;
        Ok(Self {
            query: args.query.unwrap_or_default(),
            restaurants,
        })
    }
}

pub(super) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &mut stdout)
}

pub(super) fn run_search_with(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = SearchConfig::try_from(merged)?;
    require_existing(&config.restaurants, ARG_RESTAURANTS)?;
    let catalogue = load_catalogue(&config.restaurants)?;
    let entries: Vec<ListingEntry> = search_restaurants(&config.query, catalogue)
        .into_iter()
        .map(|restaurant| ListingEntry::from(RankedEntity::unranked(restaurant)))
        .collect();
    info!("{} restaurants match {:?}", entries.len(), config.query);
    write_listing(writer, &entries)
}

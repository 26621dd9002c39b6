//! Rank command implementation for the Tablefinder CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tablefinder_core::{
    Coordinate, FixedPositionProvider, MemoryRepository, PositionProvider, nearby_listing,
};

use crate::catalogue::{ListingEntry, load_catalogue, require_existing, write_listing};
use crate::{
    ARG_LATITUDE, ARG_LONGITUDE, ARG_RESTAURANTS, CliError, ENV_RANK_RESTAURANTS,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank a restaurant catalogue by great-circle distance from \
                 a reference position. When no position is configured the \
                 catalogue is printed in its original order.",
    about = "List restaurants nearest first"
)]
#[ortho_config(prefix = "TABLEFINDER")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of restaurants.
    #[arg(long = ARG_RESTAURANTS, value_name = "path")]
    #[serde(default)]
    pub(crate) restaurants: Option<Utf8PathBuf>,
    /// Latitude of the reference position in degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the reference position in degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the restaurant catalogue.
    pub(crate) restaurants: Utf8PathBuf,
    /// Reference position, when one was configured.
    pub(crate) position: Option<Coordinate>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.restaurants, ARG_RESTAURANTS)
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let restaurants = args.restaurants.ok_or(CliError::MissingArgument {
            field: ARG_RESTAURANTS,
            env: ENV_RANK_RESTAURANTS,
        })?;
        let position = match (args.latitude, args.longitude) {
            (Some(latitude), Some(longitude)) => Some(
                Coordinate::try_new(latitude, longitude).map_err(CliError::InvalidPosition)?,
            ),
            (Some(_), None) => {
                return Err(CliError::IncompletePosition {
                    present: ARG_LATITUDE,
                    missing: ARG_LONGITUDE,
                });
            }
            (None, Some(_)) => {
                return Err(CliError::IncompletePosition {
                    present: ARG_LONGITUDE,
                    missing: ARG_LATITUDE,
                });
            }
            (None, None) => None,
        };
        Ok(Self {
            restaurants,
            position,
        })
    }
}

/// Builds the position provider for the current rank invocation.
pub(super) trait PositionSource {
    fn build(&self, config: &RankConfig) -> Box<dyn PositionProvider>;
}

/// Reports the position resolved from flags, environment or config files.
pub(super) struct ConfiguredPositionSource;

impl PositionSource for ConfiguredPositionSource {
    fn build(&self, config: &RankConfig) -> Box<dyn PositionProvider> {
        Box::new(FixedPositionProvider::from_option(config.position))
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &ConfiguredPositionSource, &mut stdout)
}

pub(super) fn run_rank_with(
    args: RankArgs,
    source: &dyn PositionSource,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let entries = execute_rank(&config, source)?;
    write_listing(writer, &entries)
}

fn execute_rank(
    config: &RankConfig,
    source: &dyn PositionSource,
) -> Result<Vec<ListingEntry>, CliError> {
    let catalogue = load_catalogue(&config.restaurants)?;
    let repository = MemoryRepository::with_entities(catalogue);
    let provider = source.build(config);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let outcome = runtime.block_on(nearby_listing(provider.as_ref(), &repository));
    Ok(outcome
        .into_listing()
        .into_iter()
        .map(ListingEntry::from)
        .collect())
}

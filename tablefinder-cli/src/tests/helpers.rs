//! Test helpers for writing catalogues and reading CLI output.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Jail;
use tablefinder_core::{Restaurant, test_support::sample_catalogue};
use tempfile::TempDir;

use crate::catalogue::ListingEntry;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a `restaurants.json` catalogue.
#[derive(Debug)]
pub(super) struct CatalogueDir {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) catalogue: Utf8PathBuf,
}

impl CatalogueDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let catalogue = root.join("restaurants.json");
        Self {
            _tmp: tmp,
            root,
            catalogue,
        }
    }

    pub(super) fn write_catalogue(&self, restaurants: &[Restaurant]) {
        let payload = serde_json::to_string_pretty(restaurants).expect("serialise catalogue");
        write_utf8(&self.catalogue, payload.as_bytes());
    }

    pub(super) fn write_sample_catalogue(&self) {
        self.write_catalogue(&sample_catalogue());
    }
}

pub(super) const ENV_RANK_LATITUDE: &str = "TABLEFINDER_CMDS_RANK_LATITUDE";
pub(super) const ENV_RANK_LONGITUDE: &str = "TABLEFINDER_CMDS_RANK_LONGITUDE";

/// Config file picked up from the working directory during discovery.
pub(super) const CONFIG_FILE_NAME: &str = ".tablefinder.toml";

/// Runs `body` with configuration discovery confined to a scratch directory.
///
/// The jail serialises access to the process environment and working
/// directory, so every test that resolves layered configuration goes through
/// it. `HOME` and `XDG_CONFIG_HOME` point into the jail so a developer's own
/// config files never leak into the result.
pub(super) fn with_config_jail<F>(body: F)
where
    F: FnOnce(&mut Jail) -> figment::error::Result<()>,
{
    Jail::expect_with(|jail| {
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join("xdg").display());
        body(jail)
    });
}

pub(super) fn parse_listing(stdout: &[u8]) -> Vec<ListingEntry> {
    let text = std::str::from_utf8(stdout).expect("stdout utf-8");
    serde_json::from_str(text).expect("output should be a JSON listing")
}

pub(super) fn listing_ids(entries: &[ListingEntry]) -> Vec<&str> {
    entries
        .iter()
        .map(|entry| entry.restaurant.id.as_str())
        .collect()
}

pub(super) type ListingResult = Result<(), crate::CliError>;

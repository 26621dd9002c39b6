//! Loading the restaurant catalogue and writing listings.

use std::io::{BufReader, Write};

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tablefinder_core::{RankedEntity, Restaurant};
use tablefinder_fs::open_utf8_file;

use crate::CliError;

/// One row of CLI output: the restaurant plus its distance, if measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ListingEntry {
    #[serde(flatten)]
    pub(crate) restaurant: Restaurant,
    /// Full-precision distance in kilometres.
    pub(crate) distance_km: Option<f64>,
    /// Distance rounded for display, e.g. `"392.2 km"`.
    pub(crate) distance_label: Option<String>,
}

impl From<RankedEntity<Restaurant>> for ListingEntry {
    fn from(ranked: RankedEntity<Restaurant>) -> Self {
        let distance_label = ranked.distance_label();
        Self {
            restaurant: ranked.entity,
            distance_km: ranked.distance_km,
            distance_label,
        }
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match tablefinder_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads a JSON array of [`Restaurant`] values from disk.
pub(crate) fn load_catalogue(path: &Utf8Path) -> Result<Vec<Restaurant>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalogue {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let catalogue: Vec<Restaurant> =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalogue {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} restaurants from {path}", catalogue.len());
    Ok(catalogue)
}

/// Write `entries` as pretty JSON followed by a newline.
pub(crate) fn write_listing(
    writer: &mut dyn Write,
    entries: &[ListingEntry],
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(entries).map_err(CliError::SerialiseListing)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteListing)?;
    writer.write_all(b"\n").map_err(CliError::WriteListing)?;
    Ok(())
}

//! Error types emitted by the Tablefinder CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use tablefinder_core::CoordinateError;
use thiserror::Error;

/// Errors emitted by the Tablefinder CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Only one half of the reference position was supplied.
    #[error("--{present} was given without --{missing}")]
    IncompletePosition {
        present: &'static str,
        missing: &'static str,
    },
    /// The reference position was out of range or not finite.
    #[error("invalid reference position: {0}")]
    InvalidPosition(#[source] CoordinateError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the restaurant catalogue failed.
    #[error("failed to open restaurant catalogue at {path:?}: {source}")]
    OpenCatalogue {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The restaurant catalogue JSON could not be decoded.
    #[error("failed to parse restaurant catalogue JSON at {path:?}: {source}")]
    ParseCatalogue {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Building the async runtime for the position provider failed.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// Serialising the listing failed.
    #[error("failed to serialise listing: {0}")]
    SerialiseListing(#[source] serde_json::Error),
    /// Writing the listing failed.
    #[error("failed to write listing: {0}")]
    WriteListing(#[source] std::io::Error),
}

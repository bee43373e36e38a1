//! Error types emitted by the Trailhead CLI.

use std::path::PathBuf;

use thiserror::Error;
use trailhead_feeds::FeedError;

/// Errors emitted by the Trailhead CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The snapshot file could not be read.
    #[error("failed to read snapshot {path:?}: {source}")]
    ReadSnapshot {
        /// Path given with `--input`.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The snapshot file is not valid JSON for the expected shape.
    #[error("failed to parse snapshot {path:?}: {source}")]
    ParseSnapshot {
        /// Path given with `--input`.
        path: PathBuf,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The output file could not be created.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Path given with `--output`.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// `--id` named a trek the snapshot does not contain.
    #[error("no trek with id {id} in the snapshot")]
    UnknownTrek {
        /// Identifier requested on the command line.
        id: u64,
    },
    /// The `gpx` subcommand needs at least one trek.
    #[error("the snapshot contains no treks")]
    EmptySnapshot,
    /// Feed generation failed; partial output was discarded.
    #[error("feed generation failed: {0}")]
    Feed(#[from] FeedError),
}

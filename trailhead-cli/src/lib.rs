//! Command-line interface for Trailhead's offline feed exports.
//!
//! The CLI reads a JSON snapshot of the published content (treks, POIs,
//! and the partner tag table) and writes one of the partner feeds. The
//! whole document is built in memory first so a failed generation never
//! leaves a truncated file behind.

#![forbid(unsafe_code)]

mod error;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Deserialize;
use url::Url;

use trailhead_core::{IdentityTransformer, InMemoryTagLookup, Poi, TagId, Trek};
use trailhead_feeds::{CirkwiPoiSerializer, CirkwiTrekSerializer, RequestContext, write_trek_gpx};

pub use error::CliError;

/// Run the CLI with the current process arguments.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    execute(cli)
}

/// Execute an already-parsed invocation.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Pois(args) => export_pois(&args),
        Command::Circuits(args) => export_circuits(&args),
        Command::Gpx(args) => export_gpx(&args),
    }
}

/// Partner feed exports for trekking content.
#[derive(Debug, Parser)]
#[command(
    name = "trailhead",
    about = "Export trekking content as partner feeds",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Export the Cirkwi POI feed.
    Pois(FeedArgs),
    /// Export the Cirkwi circuits feed.
    Circuits(FeedArgs),
    /// Export one trek as a GPX trace.
    Gpx(GpxArgs),
}

/// Arguments shared by the XML feed subcommands.
#[derive(Debug, Args)]
struct FeedArgs {
    /// JSON snapshot of the published content.
    #[arg(long, value_name = "path")]
    input: PathBuf,
    /// Base URL used to make media links absolute.
    #[arg(long, value_name = "url")]
    base_url: Url,
    /// Destination file; stdout when omitted.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
}

/// Arguments of the `gpx` subcommand.
#[derive(Debug, Args)]
struct GpxArgs {
    /// JSON snapshot of the published content.
    #[arg(long, value_name = "path")]
    input: PathBuf,
    /// Trek to export; the snapshot's first trek when omitted.
    #[arg(long, value_name = "id")]
    id: Option<u64>,
    /// Destination file; stdout when omitted.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
}

/// The JSON snapshot shape produced by the content management export.
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    treks: Vec<Trek>,
    #[serde(default)]
    pois: Vec<Poi>,
    #[serde(default)]
    cirkwi_tags: Vec<TagRecord>,
}

/// One partner tag table row.
#[derive(Debug, Deserialize)]
struct TagRecord {
    id: TagId,
    eid: u64,
    name: String,
}

impl Snapshot {
    fn tag_lookup(&self) -> InMemoryTagLookup {
        self.cirkwi_tags
            .iter()
            .map(|record| {
                (
                    record.id,
                    trailhead_core::CirkwiTag {
                        eid: record.eid,
                        name: record.name.clone(),
                    },
                )
            })
            .collect()
    }
}

fn load_snapshot(path: &Path) -> Result<Snapshot, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ReadSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, bytes).map_err(|source| CliError::CreateOutput {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .write_all(bytes)
            .map_err(|source| CliError::CreateOutput {
                path: PathBuf::from("-"),
                source,
            }),
    }
}

fn export_pois(args: &FeedArgs) -> Result<(), CliError> {
    let snapshot = load_snapshot(&args.input)?;
    let request = RequestContext::new(args.base_url.clone());
    let serializer = CirkwiPoiSerializer::new(&request, &IdentityTransformer, Vec::new());
    let document = serializer.serialize(&snapshot.pois)?;
    info!("pois feed: {} pois, {} bytes", snapshot.pois.len(), document.len());
    write_output(args.output.as_deref(), &document)
}

fn export_circuits(args: &FeedArgs) -> Result<(), CliError> {
    let snapshot = load_snapshot(&args.input)?;
    let tags = snapshot.tag_lookup();
    let request = RequestContext::new(args.base_url.clone());
    let serializer = CirkwiTrekSerializer::new(&request, &IdentityTransformer, &tags, Vec::new());
    let document = serializer.serialize(&snapshot.treks)?;
    info!(
        "circuits feed: {} treks, {} bytes",
        snapshot.treks.len(),
        document.len()
    );
    write_output(args.output.as_deref(), &document)
}

fn export_gpx(args: &GpxArgs) -> Result<(), CliError> {
    let snapshot = load_snapshot(&args.input)?;
    let trek = match args.id {
        Some(id) => snapshot
            .treks
            .iter()
            .find(|trek| trek.id == id)
            .ok_or(CliError::UnknownTrek { id })?,
        None => snapshot.treks.first().ok_or(CliError::EmptySnapshot)?,
    };
    let mut document = Vec::new();
    write_trek_gpx(trek, &IdentityTransformer, &mut document)?;
    info!("gpx export: trek {}, {} bytes", trek.id, document.len());
    write_output(args.output.as_deref(), &document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write as _;

    fn snapshot_json() -> &'static str {
        r#"{
            "treks": [{
                "id": 7,
                "created": "2014-05-17T12:00:00Z",
                "updated": "2014-06-01T08:30:00Z",
                "geometry": [{"x": 2.0, "y": 48.0}, {"x": 3.0, "y": 49.0}],
                "srid": 4326,
                "length_m": 1500.0,
                "name": {"en": "Lake loop"},
                "published_locales": ["en"],
                "themes": [{"label": "Lake", "cirkwi_id": 3}]
            }],
            "pois": [{
                "id": 42,
                "created": "2014-05-17T12:00:00Z",
                "updated": "2014-06-01T08:30:00Z",
                "geometry": {"x": 2.0, "y": 48.0},
                "srid": 4326,
                "name": {"en": "Old fountain"},
                "published_locales": ["en"]
            }],
            "cirkwi_tags": [{"id": 3, "eid": 300, "name": "Lake"}]
        }"#
    }

    fn write_snapshot() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(snapshot_json().as_bytes())
            .expect("write snapshot");
        file
    }

    #[rstest]
    fn pois_subcommand_writes_a_poi_feed() {
        let input = write_snapshot();
        let output = tempfile::NamedTempFile::new().expect("create temp file");
        let cli = Cli::try_parse_from([
            "trailhead",
            "pois",
            "--input",
            input.path().to_str().expect("UTF-8 path"),
            "--base-url",
            "https://rando.example.org",
            "--output",
            output.path().to_str().expect("UTF-8 path"),
        ])
        .expect("valid arguments");
        execute(cli).expect("export succeeds");
        let feed = fs::read_to_string(output.path()).expect("read feed");
        assert!(feed.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(feed.contains("<pois version=\"2\">"));
        assert!(feed.contains("<titre>Old fountain</titre>"));
    }

    #[rstest]
    fn circuits_subcommand_resolves_partner_tags() {
        let input = write_snapshot();
        let output = tempfile::NamedTempFile::new().expect("create temp file");
        let cli = Cli::try_parse_from([
            "trailhead",
            "circuits",
            "--input",
            input.path().to_str().expect("UTF-8 path"),
            "--base-url",
            "https://rando.example.org",
            "--output",
            output.path().to_str().expect("UTF-8 path"),
        ])
        .expect("valid arguments");
        execute(cli).expect("export succeeds");
        let feed = fs::read_to_string(output.path()).expect("read feed");
        assert!(feed.contains("<circuits version=\"2\">"));
        assert!(feed.contains("<tag_public id=\"300\" nom=\"Lake\"/>"));
        assert!(feed.contains("<distance>1500</distance>"));
    }

    #[rstest]
    fn gpx_subcommand_rejects_unknown_trek_ids() {
        let input = write_snapshot();
        let cli = Cli::try_parse_from([
            "trailhead",
            "gpx",
            "--input",
            input.path().to_str().expect("UTF-8 path"),
            "--id",
            "99",
        ])
        .expect("valid arguments");
        let err = execute(cli).expect_err("unknown trek id");
        assert!(matches!(err, CliError::UnknownTrek { id: 99 }));
    }

    #[rstest]
    fn malformed_snapshot_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"not json").expect("write snapshot");
        let cli = Cli::try_parse_from([
            "trailhead",
            "pois",
            "--input",
            file.path().to_str().expect("UTF-8 path"),
            "--base-url",
            "https://rando.example.org",
        ])
        .expect("valid arguments");
        let err = execute(cli).expect_err("invalid snapshot");
        assert!(matches!(err, CliError::ParseSnapshot { .. }));
    }
}

//! GPX trace export.
//!
//! The trek geometry becomes one GPX 1.1 track; each associated POI is
//! appended as a waypoint named `"{type}: {name}"`, with its description
//! and elevation when known. The document model and writer come from the
//! `gpx` crate.

use std::io::Write;

use ::gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};

use trailhead_core::{CoordTransformer, Trek};

use crate::error::FeedError;

/// Write a GPX 1.1 document for one trek.
pub fn write_trek_gpx<W: Write>(
    trek: &Trek,
    transformer: &dyn CoordTransformer,
    sink: W,
) -> Result<(), FeedError> {
    let line = transformer.transform_line(&trek.geometry, trek.srid)?;

    let mut segment = TrackSegment::new();
    segment.points = line.points().map(Waypoint::new).collect();

    let mut track = Track::new();
    track.name = trek.name.localized().map(str::to_owned);
    track.segments.push(segment);

    let mut document = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some("trailhead".to_owned()),
        ..Gpx::default()
    };
    document.tracks.push(track);

    for poi in &trek.pois {
        let position = transformer.transform_point(poi.geometry, poi.srid)?;
        let mut waypoint = Waypoint::new(position);
        let name = poi.name.localized().unwrap_or_default();
        waypoint.name = Some(
            match poi.kind.as_ref().and_then(|kind| kind.label.localized()) {
                Some(kind) => format!("{kind}: {name}"),
                None => name.to_owned(),
            },
        );
        waypoint.description = poi.description.localized().map(str::to_owned);
        waypoint.elevation = poi.elevation;
        document.waypoints.push(waypoint);
    }

    ::gpx::write(&document, sink)?;
    Ok(())
}

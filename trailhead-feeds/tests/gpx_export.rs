//! Behaviour of the GPX trace export.

mod common;

use rstest::rstest;

use trailhead_core::locale::{Locale, LocalizedString};
use trailhead_core::IdentityTransformer;
use trailhead_feeds::write_trek_gpx;

use common::{blank_trek, sample_poi};

fn export(trek: &trailhead_core::Trek) -> String {
    let mut sink = Vec::new();
    write_trek_gpx(trek, &IdentityTransformer, &mut sink).expect("writable sink");
    String::from_utf8(sink).expect("UTF-8 output")
}

#[rstest]
fn track_follows_the_trek_geometry() {
    let mut trek = blank_trek();
    trek.name = LocalizedString::from_pairs([("en", "Lake loop")]);
    trek.published_locales = vec![Locale::new("en")];
    let out = export(&trek);
    assert!(out.contains("<trk>"));
    assert!(out.contains("lat=\"48"));
    assert!(out.contains("lon=\"2"));
}

#[rstest]
fn each_poi_becomes_a_named_waypoint_with_elevation() {
    let mut trek = blank_trek();
    trek.pois = vec![sample_poi()];
    let out = export(&trek);
    assert!(out.contains("<wpt"));
    assert!(out.contains("<name>Fountain: Old fountain</name>"));
    assert!(out.contains("<ele>1200"));
}

#[rstest]
fn poi_without_a_type_keeps_its_bare_name() {
    let mut trek = blank_trek();
    let mut poi = sample_poi();
    poi.kind = None;
    trek.pois = vec![poi];
    let out = export(&trek);
    assert!(out.contains("<name>Old fountain</name>"));
}

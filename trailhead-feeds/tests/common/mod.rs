//! Shared fixtures for the feed generator tests.

// Compiled into each test binary; none of them uses every fixture.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use geo::{LineString, Point};
use url::Url;

use trailhead_core::locale::{Locale, LocalizedString};
use trailhead_core::{CirkwiTag, Picture, Poi, PoiType, Srid, Trek, WGS84};
use trailhead_feeds::RequestContext;

pub fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 5, 17, 12, 0, 0)
        .single()
        .expect("valid date")
}

pub fn updated() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 6, 1, 8, 30, 0)
        .single()
        .expect("valid date")
}

pub fn request() -> RequestContext {
    RequestContext::new(Url::parse("https://rando.example.org").expect("valid base"))
}

/// A POI at (lng 2.0, lat 48.0) with an English name and a category tag.
pub fn sample_poi() -> Poi {
    Poi {
        id: 42,
        created: created(),
        updated: updated(),
        geometry: Point::new(2.0, 48.0),
        srid: WGS84,
        elevation: Some(1200.0),
        kind: Some(PoiType {
            label: LocalizedString::from_pairs([("en", "Fountain")]),
            cirkwi: Some(CirkwiTag {
                eid: 12,
                name: "Water".into(),
            }),
        }),
        name: LocalizedString::from_pairs([("en", "Old fountain")]),
        description: LocalizedString::from_pairs([("en", "<p>Cold water</p>")]),
        published_locales: vec![Locale::new("en")],
        pictures: Vec::new(),
    }
}

pub fn picture() -> Picture {
    Picture {
        legend: "The fountain".into(),
        url: "/media/fountain.jpg".into(),
        author: "J. Doe".into(),
    }
}

/// A minimal trek: two-vertex WGS84 line, no optional content.
pub fn blank_trek() -> Trek {
    Trek {
        id: 7,
        created: created(),
        updated: updated(),
        geometry: LineString::from(vec![(2.0, 48.0), (3.0, 49.0)]),
        srid: WGS84,
        length_m: 0.0,
        duration_hours: None,
        practice: None,
        difficulty: None,
        themes: Vec::new(),
        accessibilities: Vec::new(),
        name: LocalizedString::new(),
        description: LocalizedString::new(),
        description_teaser: LocalizedString::new(),
        departure: LocalizedString::new(),
        arrival: LocalizedString::new(),
        ambiance: LocalizedString::new(),
        access: LocalizedString::new(),
        disabled_infrastructure: LocalizedString::new(),
        advised_parking: LocalizedString::new(),
        public_transport: LocalizedString::new(),
        advice: LocalizedString::new(),
        published_locales: Vec::new(),
        pictures: Vec::new(),
        pois: Vec::new(),
    }
}

/// A projected system the identity transformer cannot handle.
pub fn lambert() -> Srid {
    Srid(2154)
}

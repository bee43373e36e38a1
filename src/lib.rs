//! Facade crate for the Trailhead export layer.
//!
//! This crate re-exports the domain types and the partner feed generators
//! so that applications can depend on a single crate.

#![forbid(unsafe_code)]

pub use trailhead_core::{
    Accessibility, CirkwiTag, CoordTransformer, Difficulty, IdentityTransformer, InMemoryTagLookup,
    Locale, LocaleGuard, LocalizedString, Picture, Poi, PoiType, Practice, Srid, TagId, TagLookup,
    Theme, TransformError, Trek, WGS84, plain_text,
};

pub use trailhead_feeds::{
    CirkwiPoiSerializer, CirkwiTrekSerializer, FeedError, RequestContext, XmlFeedWriter,
    write_trek_gpx,
};

//! Partner feed generators for the Trailhead export layer.
//!
//! Two streaming serializers share one low-level XML writer:
//!
//! - [`CirkwiPoiSerializer`] emits a flat `<pois version="2">` feed.
//! - [`CirkwiTrekSerializer`] emits a `<circuits version="2">` feed and
//!   embeds the trek's POIs by delegating to the same POI emission logic.
//!
//! Output streams to the sink as elements are written; a failed call
//! leaves a partial, non-well-formed stream that the caller must discard.
//! [`write_trek_gpx`] covers the GPX trace export.

#![forbid(unsafe_code)]

pub mod cirkwi;
mod error;
pub mod fields;
mod gpx;
pub mod writer;

pub use cirkwi::{CirkwiPoiSerializer, CirkwiTrekSerializer};
pub use error::FeedError;
pub use fields::RequestContext;
pub use gpx::write_trek_gpx;
pub use writer::XmlFeedWriter;

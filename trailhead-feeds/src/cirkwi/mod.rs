//! Cirkwi partner feed generators.
//!
//! The partner consumes two related XML documents, both `version="2"`:
//! a flat `<pois>` feed and a `<circuits>` feed whose circuits embed
//! their POIs. Element and attribute names, nesting, and the lat-then-lng
//! field order are the wire contract; changing any of them is a breaking
//! change.

mod poi;
mod trek;

pub use poi::CirkwiPoiSerializer;
pub use trek::CirkwiTrekSerializer;

pub(crate) use poi::PoiEmitter;

use chrono::{DateTime, Utc};

/// Unix epoch seconds, the timestamp form of the feed attributes.
pub(crate) fn timestamp(at: &DateTime<Utc>) -> String {
    at.timestamp().to_string()
}

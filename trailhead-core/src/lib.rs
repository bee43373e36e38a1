//! Domain model for the Trailhead export layer.
//!
//! The types here are read-only views of the content management system's
//! records: treks, points of interest, their translations, media, and the
//! partner ("Cirkwi") tag references used to decorate feed output. The
//! feed generators in `trailhead-feeds` consume these types without
//! mutating them.
//!
//! Collaborator seams the generators depend on live here as traits:
//! [`CoordTransformer`] for coordinate reprojection and [`TagLookup`] for
//! resolving internal tag ids to partner tags.

#![forbid(unsafe_code)]

pub mod geom;
pub mod locale;
pub mod media;
pub mod poi;
pub mod tag;
pub mod text;
pub mod trek;

pub use geom::{CoordTransformer, IdentityTransformer, Srid, TransformError, WGS84};
pub use locale::{Locale, LocaleGuard, LocalizedString};
pub use media::Picture;
pub use poi::{Poi, PoiType};
pub use tag::{CirkwiTag, InMemoryTagLookup, TagId, TagLookup};
pub use text::plain_text;
pub use trek::{Accessibility, Difficulty, Practice, Theme, Trek};

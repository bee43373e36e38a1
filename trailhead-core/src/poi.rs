//! Points of interest.

use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};

use crate::geom::Srid;
use crate::locale::{Locale, LocalizedString};
use crate::media::Picture;
use crate::tag::CirkwiTag;

/// The category of a POI (fountain, viewpoint, shelter, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiType {
    /// Translated category label.
    #[serde(default)]
    pub label: LocalizedString,
    /// Partner tag this category maps to, when one exists.
    #[serde(default)]
    pub cirkwi: Option<CirkwiTag>,
}

/// A published point of interest.
///
/// Geometry is a single point in the reference system given by `srid`;
/// the feeds reproject it to WGS84 before emission. A POI without
/// published locales is still exported (wrapper, category, and address
/// blocks), just with no localized content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    /// Stable identifier, emitted as `id_poi`.
    pub id: u64,
    /// Creation time, emitted as a Unix epoch attribute.
    pub created: DateTime<Utc>,
    /// Last update time, emitted as a Unix epoch attribute.
    pub updated: DateTime<Utc>,
    /// Point geometry in the `srid` reference system.
    pub geometry: Point<f64>,
    /// Reference system of `geometry`.
    pub srid: Srid,
    /// Altitude in metres, when known. Only the GPX export uses it.
    #[serde(default)]
    pub elevation: Option<f64>,
    /// Category of the POI, when assigned.
    #[serde(default)]
    pub kind: Option<PoiType>,
    /// Translated name.
    #[serde(default)]
    pub name: LocalizedString,
    /// Translated rich-text description.
    #[serde(default)]
    pub description: LocalizedString,
    /// Locales with translator-approved content, in publication order.
    #[serde(default)]
    pub published_locales: Vec<Locale>,
    /// Feed-ready pictures.
    #[serde(default)]
    pub pictures: Vec<Picture>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn deserializes_from_a_content_snapshot() {
        let poi: Poi = serde_json::from_str(
            r#"{
                "id": 42,
                "created": "2014-05-17T12:00:00Z",
                "updated": "2014-06-01T08:30:00Z",
                "geometry": {"x": 2.0, "y": 48.0},
                "srid": 4326,
                "name": {"en": "Old fountain"},
                "published_locales": ["en"]
            }"#,
        )
        .expect("valid snapshot");
        assert_eq!(poi.id, 42);
        assert_eq!(poi.geometry.x(), 2.0);
        assert_eq!(poi.name.get(&Locale::new("en")), Some("Old fountain"));
        assert!(poi.kind.is_none());
        assert!(poi.pictures.is_empty());
    }
}

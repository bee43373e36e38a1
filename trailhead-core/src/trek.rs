//! Treks ("circuits" in the partner feed).

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use geo::LineString;
use serde::{Deserialize, Serialize};

use crate::geom::Srid;
use crate::locale::{Locale, LocalizedString};
use crate::media::Picture;
use crate::poi::Poi;
use crate::tag::{CirkwiTag, TagId};
use crate::text::plain_text;

/// The practice a trek is designed for (hiking, cycling, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    /// Partner tag carrying the locomotion type, when mapped.
    #[serde(default)]
    pub cirkwi: Option<CirkwiTag>,
}

/// Difficulty rating of a trek.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Internal partner tag id, contributed to the public tag list.
    #[serde(default)]
    pub cirkwi_id: Option<TagId>,
    /// Numeric difficulty code in the partner's scale. A stored zero
    /// reads as "no rating" in the feeds.
    #[serde(default)]
    pub cirkwi_level: Option<u32>,
}

/// A thematic classification (lake, heritage, wildlife, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Display label, for internal tooling only.
    #[serde(default)]
    pub label: String,
    /// Internal partner tag id, when mapped.
    #[serde(default)]
    pub cirkwi_id: Option<TagId>,
}

/// An accessibility classification (wheelchair, stroller, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessibility {
    /// Display label, for internal tooling only.
    #[serde(default)]
    pub label: String,
    /// Internal partner tag id, when mapped.
    #[serde(default)]
    pub cirkwi_id: Option<TagId>,
}

/// A published trek with its descriptive blocks and associated POIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trek {
    /// Stable identifier, emitted as `id_circuit`.
    pub id: u64,
    /// Creation time, emitted as a Unix epoch attribute.
    pub created: DateTime<Utc>,
    /// Last update time, emitted as a Unix epoch attribute.
    pub updated: DateTime<Utc>,
    /// Polyline geometry in the `srid` reference system.
    pub geometry: LineString<f64>,
    /// Reference system of `geometry`.
    pub srid: Srid,
    /// Length of the trek in metres.
    pub length_m: f64,
    /// Duration in hours. A stored value of exactly zero reads as
    /// "no duration"; see [`Trek::duration_minutes`].
    #[serde(default)]
    pub duration_hours: Option<f64>,
    /// Practice, when assigned.
    #[serde(default)]
    pub practice: Option<Practice>,
    /// Difficulty rating, when assigned.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Thematic classifications.
    #[serde(default)]
    pub themes: Vec<Theme>,
    /// Accessibility classifications.
    #[serde(default)]
    pub accessibilities: Vec<Accessibility>,
    /// Translated name.
    #[serde(default)]
    pub name: LocalizedString,
    /// Translated rich-text description.
    #[serde(default)]
    pub description: LocalizedString,
    /// Translated teaser shown before the description.
    #[serde(default)]
    pub description_teaser: LocalizedString,
    /// Departure place.
    #[serde(default)]
    pub departure: LocalizedString,
    /// Arrival place.
    #[serde(default)]
    pub arrival: LocalizedString,
    /// Ambiance / atmosphere text.
    #[serde(default)]
    pub ambiance: LocalizedString,
    /// How to reach the departure.
    #[serde(default)]
    pub access: LocalizedString,
    /// Infrastructure for visitors with disabilities.
    #[serde(default)]
    pub disabled_infrastructure: LocalizedString,
    /// Advised parking place.
    #[serde(default)]
    pub advised_parking: LocalizedString,
    /// Public transport options.
    #[serde(default)]
    pub public_transport: LocalizedString,
    /// Practical advice.
    #[serde(default)]
    pub advice: LocalizedString,
    /// Locales with translator-approved content, in publication order.
    #[serde(default)]
    pub published_locales: Vec<Locale>,
    /// Feed-ready pictures.
    #[serde(default)]
    pub pictures: Vec<Picture>,
    /// Published POIs geographically associated with the trek.
    #[serde(default)]
    pub pois: Vec<Poi>,
}

impl Trek {
    /// Markup-stripped teaser and description merged with a blank line,
    /// for the active locale.
    ///
    /// Each part is stripped on its own so the blank-line join survives
    /// markup removal. Both present: `"{teaser}\n\n{description}"`. One
    /// present: that one alone. Neither, or markup stripping to nothing:
    /// `None`, and the feed emits no description element.
    pub fn merged_description(&self) -> Option<String> {
        let teaser = self
            .description_teaser
            .localized()
            .map(plain_text)
            .filter(|text| !text.is_empty());
        let description = self
            .description
            .localized()
            .map(plain_text)
            .filter(|text| !text.is_empty());
        match (teaser, description) {
            (Some(teaser), Some(description)) => Some(format!("{teaser}\n\n{description}")),
            (Some(text), None) | (None, Some(text)) => Some(text),
            (None, None) => None,
        }
    }

    /// Duration in whole minutes (hours × 60, truncated).
    ///
    /// A stored duration of exactly zero is reported as `None`. This
    /// conflation of "zero" and "absent" is historical feed behaviour and
    /// is kept until the partner contract says otherwise.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.duration_hours
            .filter(|hours| *hours != 0.0)
            .map(|hours| (hours * 60.0) as i64)
    }

    /// Internal partner tag ids referenced by themes, accessibilities,
    /// and the difficulty, collected in one pass.
    pub fn cirkwi_tag_ids(&self) -> BTreeSet<TagId> {
        let mut ids: BTreeSet<TagId> = self
            .themes
            .iter()
            .filter_map(|theme| theme.cirkwi_id)
            .collect();
        ids.extend(
            self.accessibilities
                .iter()
                .filter_map(|accessibility| accessibility.cirkwi_id),
        );
        if let Some(id) = self.difficulty.as_ref().and_then(|d| d.cirkwi_id) {
            ids.insert(id);
        }
        ids
    }
}

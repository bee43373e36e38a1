//! Partner ("Cirkwi") tag references.
//!
//! Practices, difficulty levels, themes, and accessibilities may each
//! reference a partner tag. The feeds only need the partner's external id
//! and display name, resolved from a set of internal ids collected in one
//! pass over the trek. Lookup misses are expected and silently dropped.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Internal identifier of a partner tag record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TagId(pub u64);

/// A partner category/tag reference: external id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CirkwiTag {
    /// External id in the partner's referential.
    pub eid: u64,
    /// Display name used in feed attributes.
    pub name: String,
}

/// Resolves internal tag ids to partner tags.
pub trait TagLookup {
    /// Return the tags known for `ids`; unknown ids produce no entry.
    ///
    /// The result order is the contract order of the `tags_publics`
    /// block, so implementations must be deterministic.
    fn lookup(&self, ids: &BTreeSet<TagId>) -> Vec<CirkwiTag>;
}

/// In-memory [`TagLookup`] with ascending internal-id result order.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use trailhead_core::tag::{CirkwiTag, InMemoryTagLookup, TagId, TagLookup};
///
/// let lookup: InMemoryTagLookup = [(
///     TagId(3),
///     CirkwiTag { eid: 300, name: "Lake".into() },
/// )]
/// .into_iter()
/// .collect();
///
/// let found = lookup.lookup(&BTreeSet::from([TagId(3), TagId(9)]));
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].eid, 300);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTagLookup {
    tags: BTreeMap<TagId, CirkwiTag>,
}

impl InMemoryTagLookup {
    /// An empty lookup table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a tag record.
    pub fn insert(&mut self, id: TagId, tag: CirkwiTag) {
        self.tags.insert(id, tag);
    }
}

impl FromIterator<(TagId, CirkwiTag)> for InMemoryTagLookup {
    fn from_iter<I: IntoIterator<Item = (TagId, CirkwiTag)>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl TagLookup for InMemoryTagLookup {
    fn lookup(&self, ids: &BTreeSet<TagId>) -> Vec<CirkwiTag> {
        ids.iter()
            .filter_map(|id| self.tags.get(id).cloned())
            .collect()
    }
}

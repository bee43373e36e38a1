//! Pre-computed media attachments.

use serde::{Deserialize, Serialize};

/// A picture attached to a trek or POI, in its feed-ready form.
///
/// The content management layer resolves thumbnails and copyright before
/// export, so the feed only sees plain strings. `url` may be relative to
/// the serving host; the feed layer makes it absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    /// Caption shown next to the image.
    #[serde(default)]
    pub legend: String,
    /// Relative or absolute URL of the image file.
    pub url: String,
    /// Author or copyright credit.
    #[serde(default)]
    pub author: String,
}

//! Error type shared by the feed generators.

use thiserror::Error;
use trailhead_core::TransformError;

/// Errors raised while generating a feed.
///
/// Any error leaves the sink holding a partial, non-well-formed document;
/// callers must discard it rather than flush it to a response.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The output sink failed; propagated unmodified, no retry.
    #[error("output sink failure: {0}")]
    Io(#[from] std::io::Error),
    /// The XML writer rejected an event.
    #[error("XML emission failure: {0}")]
    Xml(#[from] quick_xml::Error),
    /// A geometry could not be reprojected to WGS84.
    #[error("coordinate transform failed: {0}")]
    Transform(#[from] TransformError),
    /// A media URL could not be resolved against the request base.
    #[error("cannot resolve media URL {url:?}: {source}")]
    Url {
        /// The URL as stored on the picture.
        url: String,
        /// Parse failure from the URL library.
        #[source]
        source: url::ParseError,
    },
    /// The GPX library rejected the document.
    #[error("GPX serialization failed: {0}")]
    Gpx(#[from] ::gpx::errors::GpxError),
}

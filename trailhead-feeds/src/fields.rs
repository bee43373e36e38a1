//! Scalar field and media emission helpers.
//!
//! These implement the two policies every feed element goes through:
//! "no value and no attributes means no element", and CDATA wrapping for
//! user-controlled text containing `<`, `>`, or `&`.

use std::io::Write;

use url::Url;

use trailhead_core::Picture;

use crate::error::FeedError;
use crate::writer::XmlFeedWriter;

/// The originating request, used to make media URLs absolute.
#[derive(Debug, Clone)]
pub struct RequestContext {
    base: Url,
}

impl RequestContext {
    /// Build a context from the request's scheme/host base URL.
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Resolve a stored URL against the request base.
    ///
    /// Absolute inputs pass through unchanged; relative ones are joined
    /// onto the base.
    pub fn build_absolute_uri(&self, url: &str) -> Result<String, FeedError> {
        self.base
            .join(url)
            .map(|resolved| resolved.to_string())
            .map_err(|source| FeedError::Url {
                url: url.to_owned(),
                source,
            })
    }
}

/// Emit one scalar element.
///
/// Skipped entirely when `value` is empty and `attrs` is empty. With
/// attributes but no value, a self-closing element is written. Values
/// containing `<`, `>`, or `&` are CDATA-wrapped instead of escaped —
/// free-text safety, not XML-minimal escaping.
pub fn write_field<W: Write>(
    xml: &mut XmlFeedWriter<W>,
    name: &str,
    value: &str,
    attrs: &[(&str, &str)],
) -> Result<(), FeedError> {
    if value.is_empty() && attrs.is_empty() {
        return Ok(());
    }
    if value.is_empty() {
        return xml.empty_element(name, attrs);
    }
    xml.start_element(name, attrs)?;
    if value.contains(['<', '>', '&']) {
        xml.cdata(value)?;
    } else {
        xml.text(value)?;
    }
    xml.end_element(name)
}

/// Render a coordinate or other decimal so integral values keep a
/// trailing `.0`, the form the partner's parsers were built against.
pub fn float_repr(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Emit the `<medias>` block for a picture collection, or nothing when
/// the collection is empty.
pub fn write_medias<W: Write>(
    xml: &mut XmlFeedWriter<W>,
    request: &RequestContext,
    pictures: &[Picture],
) -> Result<(), FeedError> {
    if pictures.is_empty() {
        return Ok(());
    }
    xml.start_element("medias", &[])?;
    xml.start_element("images", &[])?;
    for picture in pictures {
        xml.start_element("image", &[])?;
        write_field(xml, "legend", &picture.legend, &[])?;
        write_field(xml, "url", &request.build_absolute_uri(&picture.url)?, &[])?;
        write_field(xml, "credit", &picture.author, &[])?;
        xml.end_element("image")?;
    }
    xml.end_element("images")?;
    xml.end_element("medias")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn render(build: impl FnOnce(&mut XmlFeedWriter<Vec<u8>>) -> Result<(), FeedError>) -> String {
        let mut xml = XmlFeedWriter::new(Vec::new());
        build(&mut xml).expect("writable sink");
        String::from_utf8(xml.into_inner()).expect("UTF-8 output")
    }

    #[fixture]
    fn request() -> RequestContext {
        RequestContext::new(Url::parse("https://rando.example.org").expect("valid base"))
    }

    #[rstest]
    fn empty_value_without_attributes_emits_nothing() {
        let out = render(|xml| write_field(xml, "duree", "", &[]));
        assert_eq!(out, "");
    }

    #[rstest]
    fn empty_value_with_attributes_emits_attribute_only_element() {
        let out = render(|xml| write_field(xml, "locomotion", "", &[("difficulte", "3")]));
        assert_eq!(out, "<locomotion difficulte=\"3\"/>");
    }

    #[rstest]
    #[case("Fish & chips")]
    #[case("a <b>")]
    #[case("1 > 0")]
    fn risky_text_is_cdata_wrapped(#[case] value: &str) {
        let out = render(|xml| write_field(xml, "description", value, &[]));
        assert_eq!(out, format!("<description><![CDATA[{value}]]></description>"));
        assert!(!out.contains("&amp;"));
    }

    #[rstest]
    fn plain_text_is_escaped_not_cdata() {
        let out = render(|xml| write_field(xml, "titre", "Col du Lac", &[]));
        assert_eq!(out, "<titre>Col du Lac</titre>");
    }

    #[rstest]
    #[case(48.0, "48.0")]
    #[case(2.35, "2.35")]
    #[case(-5.0, "-5.0")]
    #[case(0.0, "0.0")]
    fn float_repr_keeps_a_decimal_point(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(float_repr(value), expected);
    }

    #[rstest]
    fn relative_picture_url_is_joined_on_base(request: RequestContext) {
        let resolved = request
            .build_absolute_uri("/media/paths/lake.jpg")
            .expect("resolvable URL");
        assert_eq!(resolved, "https://rando.example.org/media/paths/lake.jpg");
    }

    #[rstest]
    fn absolute_picture_url_passes_through(request: RequestContext) {
        let resolved = request
            .build_absolute_uri("https://cdn.example.net/lake.jpg")
            .expect("resolvable URL");
        assert_eq!(resolved, "https://cdn.example.net/lake.jpg");
    }

    #[rstest]
    fn empty_picture_set_emits_no_medias_block(request: RequestContext) {
        let out = render(|xml| write_medias(xml, &request, &[]));
        assert_eq!(out, "");
    }

    #[rstest]
    fn pictures_render_legend_url_credit(request: RequestContext) {
        let pictures = vec![Picture {
            legend: "The lake".into(),
            url: "/media/lake.jpg".into(),
            author: "J. Doe".into(),
        }];
        let out = render(|xml| write_medias(xml, &request, &pictures));
        assert_eq!(
            out,
            "<medias><images><image><legend>The lake</legend>\
             <url>https://rando.example.org/media/lake.jpg</url>\
             <credit>J. Doe</credit></image></images></medias>"
        );
    }
}

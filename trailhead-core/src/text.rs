//! Markup stripping for feed-safe text.
//!
//! Descriptive fields are edited as rich text. Feeds carry plain text,
//! so markup is rendered to text with `html2text` and then re-flowed:
//! paragraph breaks stay as blank lines, wrapping inside a paragraph
//! collapses back to single spaces.

use html2text::from_read_with_decorator;
use html2text::render::text_renderer::TrivialDecorator;

// Wide enough that the renderer never splits a word; the re-flow below
// removes line wrapping again anyway.
const RENDER_WIDTH: usize = 4096;

/// Render markup as plain text.
///
/// Tags are parsed, not pattern-matched, so a stray `<` or `>` in free
/// text survives intact. Entities are decoded once. Block elements
/// separate into paragraphs joined by a blank line.
///
/// # Examples
/// ```
/// use trailhead_core::plain_text;
///
/// assert_eq!(plain_text("<p>Steep &amp; narrow</p>"), "Steep & narrow");
/// ```
pub fn plain_text(markup: &str) -> String {
    let rendered =
        from_read_with_decorator(markup.as_bytes(), RENDER_WIDTH, TrivialDecorator::new());
    let paragraphs: Vec<String> = rendered
        .split("\n\n")
        .map(|paragraph| paragraph.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|paragraph| !paragraph.is_empty())
        .collect();
    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::plain_text;
    use rstest::rstest;

    #[rstest]
    #[case("<p>Hello</p>", "Hello")]
    #[case("<a href=\"x\">link</a> text", "link text")]
    #[case("no markup", "no markup")]
    #[case("Fish &amp; chips", "Fish & chips")]
    #[case("a &lt; b", "a < b")]
    #[case("", "")]
    fn strips_tags_and_decodes_entities(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(plain_text(input), expected);
    }

    #[rstest]
    fn raw_angle_bracket_in_free_text_survives() {
        assert_eq!(plain_text("2 < 3 is true"), "2 < 3 is true");
    }

    #[rstest]
    fn angle_bracket_inside_an_attribute_is_not_a_tag_end() {
        assert_eq!(plain_text("<a href=\"2>3\">link</a>"), "link");
    }

    #[rstest]
    fn paragraphs_separate_with_a_blank_line() {
        assert_eq!(plain_text("<p>Teaser</p><p>Body</p>"), "Teaser\n\nBody");
    }

    #[rstest]
    fn double_encoded_ampersand_decodes_once() {
        assert_eq!(plain_text("&amp;lt;"), "&lt;");
    }
}

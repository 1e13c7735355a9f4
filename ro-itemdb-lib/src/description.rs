//! Description markup processing.
//!
//! Descriptions carry inline color markers (`^RRGGBB`) that apply to the
//! text following them, and an optional `<NAVI>` block used by the client's
//! navigation system. The HTML rendering keeps the colors; property parsing
//! works on the plain text.

use std::sync::LazyLock;

use regex::Regex;

use ro_itemdb_core::Description;

use crate::props::PropertyNormalizer;

static NAVI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<NAVI>.+</NAVI>\n").expect("static pattern"));
static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^[0-9A-Fa-f]{6}").expect("static pattern"));

/// Color of text before the first marker. Segments in this color are not
/// wrapped in a span.
const DEFAULT_COLOR: &str = "000000";

/// Description text split into its HTML rendering and the plain text with
/// color markers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    pub html: String,
    pub plain: String,
}

fn push_segment(html: &mut String, segment: &str, color: &str) {
    if color == DEFAULT_COLOR {
        html.push_str(segment);
    } else {
        html.push_str(&format!(r#"<span style="color: #{color}">{segment}</span>"#));
    }
}

/// Strip `<NAVI>` blocks and convert color markers into HTML spans.
pub fn render_markup(text: &str) -> RenderedText {
    let stripped = NAVI_RE.replace_all(text, "");
    let text: &str = &stripped;

    let mut html = String::with_capacity(text.len());
    let mut plain = String::with_capacity(text.len());
    let mut color = DEFAULT_COLOR;
    let mut last = 0;

    for marker in COLOR_RE.find_iter(text) {
        let segment = &text[last..marker.start()];
        push_segment(&mut html, segment, color);
        plain.push_str(segment);
        color = &marker.as_str()[1..];
        last = marker.end();
    }

    let segment = &text[last..];
    push_segment(&mut html, segment, color);
    plain.push_str(segment);

    RenderedText {
        html: html.replace('\n', "<br />\n"),
        plain,
    }
}

/// Render a raw description and parse its properties.
pub fn process_description(
    text: Option<&str>,
    normalizer: &PropertyNormalizer,
) -> Option<Description> {
    let rendered = render_markup(text?);
    Some(Description {
        props: normalizer.normalize(&rendered.plain),
        text: rendered.html,
    })
}

#[cfg(test)]
#[path = "tests/description_tests.rs"]
mod tests;

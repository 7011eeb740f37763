use std::sync::LazyLock;

use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use tracing::debug;

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>").unwrap()
});

const SUGGESTION_TARGET_ATTR: &[u8] = b"data-generated-suggestion-target";
const LOCATION_CLASS: &str = "text-body-small inline";
const ABOUT_CLASS: &str = "inline-show-more-text";

const VOID_ELEMENTS: &[&[u8]] = &[
    b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
    b"param", b"source", b"track", b"wbr",
];

/// Text found at the known structural markers of a saved profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub title: Option<String>,
    /// Text of the first element carrying the suggestion-target marker.
    pub suggestion_target: Option<String>,
    pub location: Option<String>,
    pub about: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Title,
    SuggestionTarget,
    Location,
    About,
}

struct Capture {
    marker: Marker,
    depth: usize,
    parts: Vec<String>,
}

impl Outline {
    fn filled(&self, marker: Marker) -> bool {
        match marker {
            Marker::Title => self.title.is_some(),
            Marker::SuggestionTarget => self.suggestion_target.is_some(),
            Marker::Location => self.location.is_some(),
            Marker::About => self.about.is_some(),
        }
    }

    fn slot(&mut self, marker: Marker) -> &mut Option<String> {
        match marker {
            Marker::Title => &mut self.title,
            Marker::SuggestionTarget => &mut self.suggestion_target,
            Marker::Location => &mut self.location,
            Marker::About => &mut self.about,
        }
    }

    fn finish(&mut self, capture: Capture) {
        let text = normalize_ws(&capture.parts.join(" "));
        let slot = self.slot(capture.marker);
        if slot.is_none() && !text.is_empty() {
            *slot = Some(text);
        }
    }
}

/// Walk the markup with a lenient tokenizer and collect marker texts.
///
/// Never fails: a tokenizer error ends the walk and keeps what was found.
pub fn scan(html: &str) -> Outline {
    let cleaned = SCRIPT_RE.replace_all(html, "");
    let mut reader = Reader::from_str(&cleaned);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.trim_text(true);

    let mut outline = Outline::default();
    let mut open: Vec<Capture> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name().as_ref().to_ascii_lowercase();
                // Void elements never close, so they must not deepen a capture.
                if !VOID_ELEMENTS.contains(&name.as_slice()) {
                    for c in open.iter_mut() {
                        c.depth += 1;
                    }
                    if let Some(marker) = classify(&e, &name) {
                        if !outline.filled(marker) && !open.iter().any(|c| c.marker == marker) {
                            open.push(Capture {
                                marker,
                                depth: 1,
                                parts: Vec::new(),
                            });
                        }
                    }
                }
            }
            Ok(Event::End(_)) => {
                for c in open.iter_mut() {
                    c.depth = c.depth.saturating_sub(1);
                }
                let (done, still_open): (Vec<_>, Vec<_>) =
                    open.into_iter().partition(|c| c.depth == 0);
                open = still_open;
                for capture in done {
                    outline.finish(capture);
                }
            }
            Ok(Event::Text(e)) if !open.is_empty() => {
                let raw = String::from_utf8_lossy(&e);
                let text = decode_entities(&raw);
                for c in open.iter_mut() {
                    c.parts.push(text.clone());
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                debug!(position = reader.error_position(), %err, "outline scan stopped early");
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    for capture in open {
        outline.finish(capture);
    }
    outline
}

fn classify(e: &BytesStart, name: &[u8]) -> Option<Marker> {
    if name == b"title" {
        return Some(Marker::Title);
    }
    let mut class = String::new();
    for attr in e.html_attributes().flatten() {
        let key = attr.key.as_ref().to_ascii_lowercase();
        if key == SUGGESTION_TARGET_ATTR {
            return Some(Marker::SuggestionTarget);
        }
        if key == b"class" {
            class = String::from_utf8_lossy(&attr.value).into_owned();
        }
    }
    if class.contains(ABOUT_CLASS) {
        Some(Marker::About)
    } else if class.contains(LOCATION_CLASS) {
        Some(Marker::Location)
    } else {
        None
    }
}

/// Decode HTML5 named and numeric entities; malformed input is kept verbatim.
pub fn decode_entities(raw: &str) -> String {
    match unescape_with(raw, resolve_html5_entity) {
        Ok(text) => text.into_owned(),
        Err(_) => raw.to_string(),
    }
}

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_markers() {
        let html = r#"<!DOCTYPE html>
            <html lang=en><head><meta charset="utf-8"><title>Jane Doe | LinkedIn</title>
            <script>if (a < b) { document.write("<div>") }</script></head>
            <body>
              <div class="text-body-medium" data-generated-suggestion-target="urn:li:1">
                Staff Engineer | Rust &amp; Systems
              </div>
              <span class="text-body-small inline t-black--light">Portland,&nbsp;Oregon</span>
              <div class="inline-show-more-text--is-collapsed"><span>I build<br>things.</span></div>
            </body></html>"#;
        let outline = scan(html);
        assert_eq!(outline.title.as_deref(), Some("Jane Doe | LinkedIn"));
        assert_eq!(
            outline.suggestion_target.as_deref(),
            Some("Staff Engineer | Rust & Systems")
        );
        assert_eq!(outline.location.as_deref(), Some("Portland, Oregon"));
        assert_eq!(outline.about.as_deref(), Some("I build things."));
    }

    #[test]
    fn first_marker_wins() {
        let html = r#"<p data-generated-suggestion-target="a">First | one</p>
                      <p data-generated-suggestion-target="b">Second | two</p>"#;
        assert_eq!(scan(html).suggestion_target.as_deref(), Some("First | one"));
    }

    #[test]
    fn empty_and_garbage_input() {
        assert_eq!(scan(""), Outline::default());
        assert_eq!(scan("<<<>>> &&& <"), Outline::default());
    }

    #[test]
    fn keeps_text_found_before_an_error() {
        let html = "<title>Jane Doe | LinkedIn</title><div <<< broken";
        assert_eq!(scan(html).title.as_deref(), Some("Jane Doe | LinkedIn"));
    }

    #[test]
    fn unterminated_capture_is_flushed() {
        let html = r#"<span class="text-body-small inline">Lisbon, Portugal"#;
        assert_eq!(scan(html).location.as_deref(), Some("Lisbon, Portugal"));
    }

    #[test]
    fn entity_decoding() {
        assert_eq!(decode_entities("a&nbsp;&amp;&#39;b"), "a\u{a0}&'b");
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
    }
}

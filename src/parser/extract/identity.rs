use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::GeneratedIdentity;
use crate::parser::outline::{decode_entities, normalize_ws, Outline};
use crate::parser::seed::IdentitySeed;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title\s*>").unwrap());
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^|]+)").unwrap());
// Unread-notification counter LinkedIn prepends to the title: "(3) Jane Doe | LinkedIn"
static COUNTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(\d+\+?\)\s*").unwrap());

pub fn extract(html: &str, outline: &Outline, seed: &IdentitySeed) -> GeneratedIdentity {
    let full_name = first_tier(
        "full_name",
        outline.title.as_deref().and_then(name_from_title),
        || {
            TITLE_RE
                .captures(html)
                .and_then(|c| name_from_title(&normalize_ws(&decode_entities(&c[1]))))
        },
        &seed.full_name,
    );

    let headline = first_tier(
        "headline",
        outline
            .suggestion_target
            .clone()
            .filter(|h| h.contains('|')),
        || anchored_text(html, &seed.headline_anchor),
        &seed.headline,
    );

    let location = first_tier(
        "location",
        outline.location.clone(),
        || literal_text(html, &seed.location),
        &seed.location,
    );

    let about = first_tier(
        "about",
        outline.about.clone(),
        || anchored_text(html, &seed.about_anchor),
        &seed.about,
    );

    GeneratedIdentity {
        full_name,
        headline,
        location,
        about,
        profile_photo: seed.profile_photo.clone(),
    }
}

/// Structural hit, else textual pattern, else the seed value.
fn first_tier(
    field: &'static str,
    structural: Option<String>,
    pattern: impl FnOnce() -> Option<String>,
    fallback: &str,
) -> String {
    if let Some(v) = structural {
        debug!(field, tier = "structural");
        return v;
    }
    if let Some(v) = pattern() {
        debug!(field, tier = "pattern");
        return v;
    }
    debug!(field, tier = "seed");
    fallback.to_string()
}

/// The segment before the first `|`, without a leading notification counter.
pub fn name_from_title(title: &str) -> Option<String> {
    let title = COUNTER_RE.replace(title.trim(), "");
    let name = NAME_RE.captures(&title)?.get(1)?.as_str().trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// `anchor` plus everything up to the next tag.
fn anchored_text(html: &str, anchor: &str) -> Option<String> {
    if anchor.is_empty() {
        return None;
    }
    let re = Regex::new(&format!("{}[^<]+", regex::escape(anchor))).ok()?;
    let found = re.find(html)?;
    let text = normalize_ws(&decode_entities(found.as_str()));
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn literal_text(html: &str, literal: &str) -> Option<String> {
    if !literal.is_empty() && html.contains(literal) {
        Some(literal.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> IdentitySeed {
        IdentitySeed {
            full_name: "Fallback Name".into(),
            headline: "Fallback Headline".into(),
            headline_anchor: "Principal Engineer".into(),
            location: "Berlin, Germany".into(),
            about: "Fallback about".into(),
            about_anchor: "I design resilient".into(),
            profile_photo: "/me.png".into(),
            linkedin: "https://www.linkedin.com/in/fallback".into(),
        }
    }

    #[test]
    fn name_from_title_variants() {
        assert_eq!(name_from_title("Jane Doe | LinkedIn").as_deref(), Some("Jane Doe"));
        assert_eq!(name_from_title("(12) Jane Doe | LinkedIn").as_deref(), Some("Jane Doe"));
        assert_eq!(name_from_title("Jane Doe").as_deref(), Some("Jane Doe"));
        assert_eq!(name_from_title("| LinkedIn"), None);
        assert_eq!(name_from_title("   "), None);
    }

    #[test]
    fn structural_tier_wins() {
        let outline = Outline {
            title: Some("Jane Doe | LinkedIn".into()),
            suggestion_target: Some("Staff Engineer | Rust".into()),
            location: Some("Portland, Oregon".into()),
            about: Some("I build things.".into()),
        };
        let id = extract("", &outline, &seed());
        assert_eq!(id.full_name, "Jane Doe");
        assert_eq!(id.headline, "Staff Engineer | Rust");
        assert_eq!(id.location, "Portland, Oregon");
        assert_eq!(id.about, "I build things.");
        assert_eq!(id.profile_photo, "/me.png");
    }

    #[test]
    fn headline_without_separator_falls_through() {
        let outline = Outline {
            suggestion_target: Some("Add a section".into()),
            ..Outline::default()
        };
        let html = r#"<p>Principal Engineer at Example &amp; Co | Berlin, Germany</p>"#;
        let id = extract(html, &outline, &seed());
        assert_eq!(id.headline, "Principal Engineer at Example & Co | Berlin, Germany");
        assert_eq!(id.location, "Berlin, Germany");
    }

    #[test]
    fn pattern_tier_reads_raw_markup() {
        let html = r#"<TITLE>Max Muster | LinkedIn</TITLE>
            <code>{"summary":"I design resilient platforms for fintech teams."}</code>"#;
        let id = extract(html, &Outline::default(), &seed());
        assert_eq!(id.full_name, "Max Muster");
        assert_eq!(id.about, r#"I design resilient platforms for fintech teams."}"#);
        assert_eq!(id.headline, "Fallback Headline");
        assert_eq!(id.location, "Berlin, Germany");
    }

    #[test]
    fn seed_tier_on_empty_markup() {
        let id = extract("", &Outline::default(), &seed());
        assert_eq!(id.full_name, "Fallback Name");
        assert_eq!(id.headline, "Fallback Headline");
        assert_eq!(id.location, "Berlin, Germany");
        assert_eq!(id.about, "Fallback about");
    }

    #[test]
    fn anchors_are_literal() {
        let mut s = seed();
        s.headline_anchor = "C++ (Senior)".into();
        let id = extract("<p>C++ (Senior) Developer</p>", &Outline::default(), &s);
        assert_eq!(id.headline, "C++ (Senior) Developer");
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::model::GeneratedSocials;
use crate::parser::seed::IdentitySeed;

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"linkedin\.com/in/[a-zA-Z0-9-]+").unwrap());

/// Only the LinkedIn URL is ever present in a public profile save; the
/// other channels are left for the overrides document.
pub fn extract(html: &str, seed: &IdentitySeed) -> GeneratedSocials {
    let linkedin = LINKEDIN_RE
        .find(html)
        .map(|m| format!("https://www.{}", m.as_str()))
        .unwrap_or_else(|| seed.linkedin.clone());

    GeneratedSocials {
        linkedin: Some(linkedin).filter(|l| !l.is_empty()),
        email: None,
        github: None,
        twitter: None,
        website: None,
    }
}

pub mod identity;
pub mod socials;

use chrono::{DateTime, Utc};

use super::outline::Outline;
use super::seed::SeedDataSource;
use crate::model::{ExperienceEntry, GeneratedProfile};

const DEFAULT_EMPLOYMENT_TYPE: &str = "Full-time";

pub fn extract_all(
    html: &str,
    outline: &Outline,
    source_file: &str,
    seed: &dyn SeedDataSource,
    extracted_at: DateTime<Utc>,
) -> GeneratedProfile {
    let identity_seed = seed.identity();

    GeneratedProfile {
        identity: identity::extract(html, outline, &identity_seed),
        socials: socials::extract(html, &identity_seed),
        experience: seed.experience().into_iter().map(with_employment_type).collect(),
        education: seed.education(),
        skills: seed.skills(),
        // Projects, hackathons and certifications only come from the overrides document
        projects: Vec::new(),
        hackathons: Vec::new(),
        certifications: Vec::new(),
        extracted_at,
        source_file: source_file.to_string(),
    }
}

fn with_employment_type(mut entry: ExperienceEntry) -> ExperienceEntry {
    if entry.employment_type.is_empty() {
        entry.employment_type = DEFAULT_EMPLOYMENT_TYPE.to_string();
    }
    entry
}

// ── Tests ──

use serde_json::Value;

use crate::field::Field;
use crate::overrides::merge::deep_merge;
use crate::overrides::schema::*;

const EXAMPLE_PROJECTS: &[(&str, &str, [&str; 3])] = &[
    ("TODO: Project 1", "TODO: Jan 2024 - Present", ["Next.js", "TypeScript", "OpenAI"]),
    ("TODO: Project 2", "TODO: Jun 2023 - Dec 2023", ["Python", "LangChain", "RAG"]),
    ("TODO: Project 3", "TODO: Mar 2023 - May 2023", ["React", "Node.js", "MongoDB"]),
    ("TODO: Project 4", "TODO: Jan 2023 - Feb 2023", ["Python", "Azure", "Docker"]),
];

const PROJECT_URL_PLACEHOLDER: &str = "TODO: https://project-url.com";

/// Every schema field present. `Unset` defers to the generated artifact,
/// `TODO:` text marks what only a human can fill in.
pub fn default_skeleton() -> OverrideDocument {
    OverrideDocument {
        identity: IdentityOverrides {
            full_name: Field::Unset,
            headline: Field::Unset,
            location: Field::Unset,
            about: Field::Unset,
            profile_photo: Field::text("TODO: Add your profile photo to /public/me.png"),
            initials: Field::text("NM"),
            url: Field::text("TODO: Your portfolio URL (e.g., https://nakulmandhre.com)"),
            location_link: Field::text("https://www.google.com/maps/place/atlanta"),
        },
        socials: SocialOverrides {
            linkedin: Field::Unset,
            email: Field::text("TODO: your.email@example.com"),
            github: Field::text("TODO: https://github.com/yourusername"),
            twitter: Field::text("TODO: https://twitter.com/yourusername"),
            youtube: Field::text(""),
            website: Field::text(""),
        },
        experience: Vec::new(),
        education: Vec::new(),
        skills: None,
        projects: EXAMPLE_PROJECTS
            .iter()
            .map(|(title, dates, technologies)| ProjectEntry {
                title: Field::text(*title),
                description: Field::text("TODO: Brief description of the project"),
                dates: Field::text(*dates),
                href: Field::text(PROJECT_URL_PLACEHOLDER),
                video: Field::text(""),
                image: Field::text(""),
                technologies: technologies.iter().map(|t| t.to_string()).collect(),
                active: Some(true),
                links: vec![ProjectLink {
                    kind: "Website".to_string(),
                    href: Field::text(PROJECT_URL_PLACEHOLDER),
                }],
            })
            .collect(),
        hackathons: Vec::new(),
    }
}

/// Fold an existing overrides document onto `skeleton`.
pub fn reconcile_with(
    skeleton: &OverrideDocument,
    existing: Option<&Value>,
) -> serde_json::Result<Value> {
    let base = serde_json::to_value(skeleton)?;
    Ok(match existing {
        Some(existing) => deep_merge(base, existing),
        None => base,
    })
}

/// Reconcile against the built-in skeleton.
pub fn reconcile(existing: Option<&Value>) -> serde_json::Result<Value> {
    reconcile_with(&default_skeleton(), existing)
}

// ── Tests ──

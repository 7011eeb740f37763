use serde::{Deserialize, Serialize};

use crate::field::{placeholder_as_default, Field};

/// The hand-edited overrides document. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideDocument {
    #[serde(deserialize_with = "placeholder_as_default")]
    pub identity: IdentityOverrides,
    #[serde(deserialize_with = "placeholder_as_default")]
    pub socials: SocialOverrides,
    #[serde(deserialize_with = "placeholder_as_default")]
    pub experience: Vec<ExperienceOverride>,
    #[serde(deserialize_with = "placeholder_as_default")]
    pub education: Vec<EducationOverride>,
    /// `null` or a placeholder defers to the generated skills.
    #[serde(deserialize_with = "placeholder_as_default")]
    pub skills: Option<Vec<String>>,
    #[serde(deserialize_with = "placeholder_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "placeholder_as_default")]
    pub hackathons: Vec<HackathonEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentityOverrides {
    pub full_name: Field<String>,
    pub headline: Field<String>,
    pub location: Field<String>,
    pub about: Field<String>,
    pub profile_photo: Field<String>,
    pub initials: Field<String>,
    pub url: Field<String>,
    pub location_link: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialOverrides {
    pub linkedin: Field<String>,
    pub email: Field<String>,
    pub github: Field<String>,
    #[serde(alias = "x")]
    pub twitter: Field<String>,
    pub youtube: Field<String>,
    pub website: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceOverride {
    pub title: Field<String>,
    pub company: Field<String>,
    pub company_url: Field<String>,
    pub employment_type: Field<String>,
    pub location: Field<String>,
    pub start_date: Field<String>,
    pub end_date: Field<String>,
    pub description: Field<String>,
    pub logo_url: Field<String>,
    #[serde(deserialize_with = "placeholder_as_default")]
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationOverride {
    pub school: Field<String>,
    pub degree: Field<String>,
    pub field_of_study: Field<String>,
    pub start_date: Field<String>,
    pub end_date: Field<String>,
    pub logo_url: Field<String>,
    pub href: Field<String>,
}

/// A project card. Only the overrides document ever fills these in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: Field<String>,
    pub description: Field<String>,
    pub dates: Field<String>,
    pub href: Field<String>,
    pub video: Field<String>,
    pub image: Field<String>,
    #[serde(deserialize_with = "placeholder_as_default")]
    pub technologies: Vec<String>,
    pub active: Option<bool>,
    #[serde(deserialize_with = "placeholder_as_default")]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub href: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HackathonEntry {
    pub title: Field<String>,
    pub dates: Field<String>,
    pub location: Field<String>,
    pub description: Field<String>,
    pub image: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub win: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub mlh: Field<String>,
    #[serde(deserialize_with = "placeholder_as_default")]
    pub links: Vec<HackathonLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HackathonLink {
    pub title: String,
    pub href: Field<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_nulls_and_missing_groups() {
        let doc: OverrideDocument = serde_json::from_str(
            r#"{"identity": null, "experience": null, "skills": null,
                "socials": {"x": "https://x.com/jane"}}"#,
        )
        .unwrap();
        assert_eq!(doc.identity, IdentityOverrides::default());
        assert!(doc.experience.is_empty());
        assert_eq!(doc.skills, None);
        assert_eq!(doc.socials.twitter, Field::Provided("https://x.com/jane".into()));
    }

    #[test]
    fn empty_object_is_all_unset() {
        let doc: OverrideDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, OverrideDocument::default());
    }

    #[test]
    fn placeholder_collections_read_as_empty() {
        let doc: OverrideDocument = serde_json::from_str(
            r#"{"skills": "TODO: list your skills", "experience": "TODO: add roles",
                "projects": "TODO: add projects", "identity": "TODO: fill in"}"#,
        )
        .unwrap();
        assert_eq!(doc, OverrideDocument::default());
    }

    #[test]
    fn project_link_type_key() {
        let link: ProjectLink =
            serde_json::from_str(r#"{"type": "Source", "href": "https://github.com/jane/app"}"#)
                .unwrap();
        assert_eq!(link.kind, "Source");
        assert_eq!(link.href, Field::Provided("https://github.com/jane/app".into()));
    }
}

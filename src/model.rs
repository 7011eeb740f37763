use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::{empty_as_none, null_as_default};
use crate::overrides::schema::{HackathonEntry, ProjectEntry};

/// The Extractor's artifact: a profile record plus provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProfile {
    pub identity: GeneratedIdentity,
    pub socials: GeneratedSocials,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hackathons: Vec<HackathonEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    pub extracted_at: DateTime<Utc>,
    pub source_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedIdentity {
    pub full_name: String,
    pub headline: String,
    pub location: String,
    pub about: String,
    pub profile_photo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedSocials {
    #[serde(deserialize_with = "empty_as_none")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub github: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub twitter: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub company_url: String,
    pub employment_type: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub logo_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub logo_url: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_artifact_with_empty_social_strings() {
        let json = r#"{
            "identity": {"fullName": "Jane Doe", "headline": "Engineer", "location": "Remote",
                         "about": "", "profilePhoto": "/me.png"},
            "socials": {"linkedin": "https://www.linkedin.com/in/jane", "email": "", "github": "",
                        "twitter": "", "website": ""},
            "experience": [{"title": "Engineer", "company": "Acme", "companyUrl": "https://acme.test",
                            "employmentType": "Full-time", "location": "Remote", "startDate": "2020",
                            "endDate": "Present", "description": "", "logoUrl": ""}],
            "education": [],
            "skills": ["Rust"],
            "projects": [],
            "certifications": [],
            "extractedAt": "2026-01-02T03:04:05.000Z",
            "sourceFile": "saved_resource(5).html"
        }"#;
        let profile: GeneratedProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.identity.full_name, "Jane Doe");
        assert_eq!(profile.socials.linkedin.as_deref(), Some("https://www.linkedin.com/in/jane"));
        assert_eq!(profile.socials.github, None);
        assert_eq!(profile.experience[0].company, "Acme");
        assert!(profile.hackathons.is_empty());
        assert_eq!(profile.source_file, "saved_resource(5).html");
    }
}

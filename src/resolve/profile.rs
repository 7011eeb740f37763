use serde::Serialize;

/// The render-ready profile. No field is ever `null` or `TODO:`-valued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProfile {
    pub identity: Identity,
    pub socials: Socials,
    pub skills: Vec<String>,
    pub work: Vec<WorkEntry>,
    pub education: Vec<SchoolEntry>,
    pub projects: Vec<Project>,
    pub hackathons: Vec<Hackathon>,
    pub contact: Contact,
    pub navbar: Vec<NavEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub full_name: String,
    pub headline: String,
    pub location: String,
    pub about: String,
    pub avatar_url: String,
    pub initials: String,
    pub url: String,
    pub location_link: String,
}

/// Resolved channel values; an empty string means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Socials {
    pub linkedin: String,
    pub email: String,
    pub github: String,
    pub x: String,
    pub youtube: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub company: String,
    pub href: String,
    pub badges: Vec<String>,
    pub location: String,
    pub title: String,
    pub employment_type: String,
    pub logo_url: String,
    pub start: String,
    pub end: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolEntry {
    pub school: String,
    pub href: String,
    /// Degree and field of study, comma separated.
    pub degree: String,
    pub logo_url: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: String,
    pub href: String,
    pub dates: String,
    pub active: bool,
    pub description: String,
    pub technologies: Vec<String>,
    pub links: Vec<TypedLink>,
    pub image: String,
    pub video: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hackathon {
    pub title: String,
    pub dates: String,
    pub location: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mlh: Option<String>,
    pub links: Vec<TitledLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitledLink {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: String,
    pub tel: String,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Channel {
    GitHub,
    LinkedIn,
    X,
    Youtube,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub channel: Channel,
    pub name: String,
    pub url: String,
    /// Value present and not a placeholder.
    pub has_link: bool,
    /// Shown in the site navigation.
    pub navbar: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub href: String,
    pub label: String,
}

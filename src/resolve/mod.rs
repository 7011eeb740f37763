pub mod nav;
pub mod profile;

use crate::config::ResolveDefaults;
use crate::field::Field;
use crate::model::{EducationEntry, ExperienceEntry, GeneratedProfile};
use crate::overrides::schema::{
    EducationOverride, ExperienceOverride, HackathonEntry, OverrideDocument, ProjectEntry,
};
use profile::*;

const NO_LINK: &str = "#";
const OPEN_ENDED: &str = "Present";

/// Manual over generated over hardcoded defaults. No I/O.
pub fn resolve(
    generated: &GeneratedProfile,
    manual: &OverrideDocument,
    defaults: &ResolveDefaults,
) -> ResolvedProfile {
    let gen_id = &generated.identity;
    let man_id = &manual.identity;

    let identity = Identity {
        full_name: man_id.full_name.resolve(Some(&gen_id.full_name), ""),
        headline: man_id.headline.resolve(Some(&gen_id.headline), ""),
        location: man_id.location.resolve(Some(&gen_id.location), ""),
        about: man_id.about.resolve(Some(&gen_id.about), ""),
        avatar_url: man_id
            .profile_photo
            .resolve(Some(&gen_id.profile_photo), &defaults.avatar_url),
        initials: man_id.initials.or_default(&defaults.initials),
        url: man_id.url.or_default(&defaults.url),
        location_link: man_id.location_link.or_default(&defaults.location_link),
    };

    let gen_soc = &generated.socials;
    let man_soc = &manual.socials;
    let socials = Socials {
        linkedin: man_soc.linkedin.resolve(gen_soc.linkedin.as_deref(), ""),
        email: man_soc.email.resolve(gen_soc.email.as_deref(), ""),
        github: man_soc.github.resolve(gen_soc.github.as_deref(), ""),
        x: man_soc.twitter.resolve(gen_soc.twitter.as_deref(), ""),
        youtube: man_soc.youtube.or_default(""),
        website: man_soc.website.resolve(gen_soc.website.as_deref(), ""),
    };

    let skills = match &manual.skills {
        Some(skills) if !skills.is_empty() => skills.clone(),
        _ => generated.skills.clone(),
    };

    let work = if manual.experience.is_empty() {
        generated.experience.iter().map(work_from_generated).collect()
    } else {
        manual.experience.iter().map(work_from_override).collect()
    };

    let education = if manual.education.is_empty() {
        generated.education.iter().map(school_from_generated).collect()
    } else {
        manual.education.iter().map(school_from_override).collect()
    };

    let projects = prefer_non_empty(&manual.projects, &generated.projects)
        .iter()
        .filter_map(project)
        .collect();

    let hackathons = prefer_non_empty(&manual.hackathons, &generated.hackathons)
        .iter()
        .filter_map(hackathon)
        .collect();

    let social = nav::social_links(&socials);
    let navbar = nav::navigation(&social);
    let contact = Contact {
        email: if nav::has_link(&socials.email) {
            socials.email.clone()
        } else {
            defaults.contact_email.clone()
        },
        tel: defaults.tel.clone(),
        social,
    };

    ResolvedProfile {
        identity,
        socials,
        skills,
        work,
        education,
        projects,
        hackathons,
        contact,
        navbar,
    }
}

/// A non-empty override collection replaces the generated one wholesale.
fn prefer_non_empty<'a, T>(manual: &'a [T], generated: &'a [T]) -> &'a [T] {
    if manual.is_empty() {
        generated
    } else {
        manual
    }
}

fn or_text(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn work_from_generated(e: &ExperienceEntry) -> WorkEntry {
    WorkEntry {
        company: e.company.clone(),
        href: or_text(&e.company_url, NO_LINK),
        badges: e.badges.clone(),
        location: e.location.clone(),
        title: e.title.clone(),
        employment_type: e.employment_type.clone(),
        logo_url: e.logo_url.clone(),
        start: e.start_date.clone(),
        end: or_text(&e.end_date, OPEN_ENDED),
        description: e.description.clone(),
    }
}

fn work_from_override(e: &ExperienceOverride) -> WorkEntry {
    WorkEntry {
        company: e.company.or_default(""),
        href: e.company_url.or_default(NO_LINK),
        badges: e.badges.clone(),
        location: e.location.or_default(""),
        title: e.title.or_default(""),
        employment_type: e.employment_type.or_default(""),
        logo_url: e.logo_url.or_default(""),
        start: e.start_date.or_default(""),
        end: e.end_date.or_default(OPEN_ENDED),
        description: e.description.or_default(""),
    }
}

fn degree_line(degree: &str, field_of_study: &str) -> String {
    if field_of_study.is_empty() {
        degree.to_string()
    } else {
        format!("{degree}, {field_of_study}")
    }
}

fn school_from_generated(e: &EducationEntry) -> SchoolEntry {
    SchoolEntry {
        school: e.school.clone(),
        href: or_text(&e.href, NO_LINK),
        degree: degree_line(&e.degree, &e.field_of_study),
        logo_url: e.logo_url.clone(),
        start: e.start_date.clone(),
        end: e.end_date.clone(),
    }
}

fn school_from_override(e: &EducationOverride) -> SchoolEntry {
    SchoolEntry {
        school: e.school.or_default(""),
        href: e.href.or_default(NO_LINK),
        degree: degree_line(&e.degree.or_default(""), &e.field_of_study.or_default("")),
        logo_url: e.logo_url.or_default(""),
        start: e.start_date.or_default(""),
        end: e.end_date.or_default(""),
    }
}

/// Entries without a real title are not written yet and are left out.
fn project(p: &ProjectEntry) -> Option<Project> {
    let title = p.title.provided()?.clone();
    Some(Project {
        title,
        href: p.href.or_default(""),
        dates: p.dates.or_default(""),
        active: p.active.unwrap_or(true),
        description: p.description.or_default(""),
        technologies: p.technologies.clone(),
        links: p
            .links
            .iter()
            .filter_map(|l| {
                Some(TypedLink {
                    kind: l.kind.clone(),
                    href: l.href.provided()?.clone(),
                })
            })
            .collect(),
        image: p.image.or_default(""),
        video: p.video.or_default(""),
    })
}

fn hackathon(h: &HackathonEntry) -> Option<Hackathon> {
    let title = h.title.provided()?.clone();
    Some(Hackathon {
        title,
        dates: h.dates.or_default(""),
        location: h.location.or_default(""),
        description: h.description.or_default(""),
        image: h.image.or_default(""),
        win: provided_text(&h.win),
        mlh: provided_text(&h.mlh),
        links: h
            .links
            .iter()
            .filter_map(|l| {
                Some(TitledLink {
                    title: l.title.clone(),
                    href: l.href.provided()?.clone(),
                })
            })
            .collect(),
    })
}

fn provided_text(field: &Field<String>) -> Option<String> {
    field.provided().filter(|s| !s.is_empty()).cloned()
}

// ── Tests ──

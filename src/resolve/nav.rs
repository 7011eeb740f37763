use crate::field::is_placeholder;
use crate::resolve::profile::{Channel, NavEntry, SocialLink, Socials};

const STATIC_NAV: &[(&str, &str)] = &[("/", "Home")];
const LINKEDIN_HOME: &str = "https://linkedin.com";
const NO_LINK: &str = "#";

pub fn has_link(value: &str) -> bool {
    !value.is_empty() && !is_placeholder(value)
}

/// One entry per channel, in display order.
pub fn social_links(socials: &Socials) -> Vec<SocialLink> {
    let link = |channel, name: &str, value: &str, navbar: bool| SocialLink {
        channel,
        name: name.to_string(),
        url: if has_link(value) {
            value.to_string()
        } else {
            NO_LINK.to_string()
        },
        has_link: has_link(value),
        navbar,
    };

    let mut linkedin = link(Channel::LinkedIn, "LinkedIn", &socials.linkedin, true);
    if !linkedin.has_link {
        linkedin.url = LINKEDIN_HOME.to_string();
    }

    let mut email = link(Channel::Email, "Send Email", &socials.email, false);
    if email.has_link {
        email.url = format!("mailto:{}", socials.email);
    }

    vec![
        link(Channel::GitHub, "GitHub", &socials.github, has_link(&socials.github)),
        linkedin,
        link(Channel::X, "X", &socials.x, has_link(&socials.x)),
        link(Channel::Youtube, "Youtube", &socials.youtube, has_link(&socials.youtube)),
        email,
    ]
}

/// Static pages first, then every channel flagged for the navbar.
pub fn navigation(links: &[SocialLink]) -> Vec<NavEntry> {
    STATIC_NAV
        .iter()
        .map(|(href, label)| NavEntry {
            href: href.to_string(),
            label: label.to_string(),
        })
        .chain(links.iter().filter(|l| l.navbar).map(|l| NavEntry {
            href: l.url.clone(),
            label: l.name.clone(),
        }))
        .collect()
}

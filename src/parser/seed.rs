use crate::model::{EducationEntry, ExperienceEntry};

/// Last-resort identity values and the phrases that anchor the text scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentitySeed {
    pub full_name: String,
    pub headline: String,
    /// Literal prefix of the real headline in saved markup.
    pub headline_anchor: String,
    pub location: String,
    pub about: String,
    /// Literal prefix of the about text in saved markup.
    pub about_anchor: String,
    pub profile_photo: String,
    pub linkedin: String,
}

/// Curated data standing in for sections a static page save cannot carry.
///
/// Experience, education and skills are lazy-loaded on the live profile, so
/// the extractor takes them from here instead of from the markup.
pub trait SeedDataSource {
    fn identity(&self) -> IdentitySeed;
    fn experience(&self) -> Vec<ExperienceEntry>;
    fn education(&self) -> Vec<EducationEntry>;
    fn skills(&self) -> Vec<String>;
}

/// The hand-maintained tables shipped with the importer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuratedSeed;

// (company, title, start, end, location, description, domain)
const KNOWN_COMPANIES: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "Candescent",
        "Forward Deployed Engineer",
        "2024",
        "Present",
        "Remote",
        "Building AI-powered solutions for enterprise clients.",
        "candescent.com",
    ),
    (
        "Draup",
        "Product Manager / Data Analyst",
        "2021",
        "2024",
        "India",
        "Led product development and data analytics initiatives.",
        "draup.com",
    ),
    (
        "MarketsandMarkets",
        "Research Analyst",
        "2019",
        "2021",
        "India",
        "Conducted market research and competitive analysis.",
        "marketsandmarkets.com",
    ),
    (
        "Deloitte",
        "Consultant",
        "2017",
        "2019",
        "India",
        "Provided consulting services to enterprise clients.",
        "deloitte.com",
    ),
];

// (school, degree, field, start, end, logo domain, href)
const KNOWN_EDUCATION: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "Emory University - Goizueta Business School",
        "Master of Business Administration - MBA",
        "Technology Management",
        "2025",
        "2026",
        "emory.edu",
        "https://goizueta.emory.edu",
    ),
    (
        "Stanford University",
        "Professional Certificate",
        "Machine Learning",
        "2023",
        "2024",
        "stanford.edu",
        "https://stanford.edu",
    ),
    (
        "Hindustan University",
        "Bachelor of Technology - BTech",
        "Electronics and Communication Engineering",
        "2013",
        "2017",
        "hindustanuniv.ac.in",
        "https://hindustanuniv.ac.in",
    ),
];

const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "TypeScript",
    "React",
    "Next.js",
    "Node.js",
    "LangChain",
    "RAG",
    "LLM",
    "OpenAI",
    "Azure",
    "AWS",
    "Docker",
    "SQL",
    "PostgreSQL",
    "MongoDB",
    "Git",
    "Agile",
    "Product Management",
    "Data Analytics",
    "Process Optimization",
];

fn logo_url(domain: &str) -> String {
    format!("https://logo.clearbit.com/{domain}")
}

impl SeedDataSource for CuratedSeed {
    fn identity(&self) -> IdentitySeed {
        IdentitySeed {
            full_name: "Nakul S Mandhre".to_string(),
            headline: "Emory Tech MBA 2026 | Forward Deployed Engineer | RAG Copilots • LLM Evals • Process Optimization".to_string(),
            headline_anchor: "Emory Tech MBA".to_string(),
            location: "Atlanta, Georgia, United States".to_string(),
            about: "I enjoy designing and scaling digital strategies that enable businesses to transform with Agentic AI. I'm passionate about connecting analytics, automation, and human creativity to solve complex problems and turn data into a strategic advantage.".to_string(),
            about_anchor: "I enjoy designing and scaling digital strat".to_string(),
            profile_photo: "/me.png".to_string(),
            linkedin: "https://www.linkedin.com/in/nakulmandhre".to_string(),
        }
    }

    fn experience(&self) -> Vec<ExperienceEntry> {
        KNOWN_COMPANIES
            .iter()
            .map(
                |(company, title, start, end, location, description, domain)| ExperienceEntry {
                    title: title.to_string(),
                    company: company.to_string(),
                    company_url: format!("https://{domain}"),
                    employment_type: String::new(),
                    location: location.to_string(),
                    start_date: start.to_string(),
                    end_date: end.to_string(),
                    description: description.to_string(),
                    logo_url: logo_url(domain),
                    badges: Vec::new(),
                },
            )
            .collect()
    }

    fn education(&self) -> Vec<EducationEntry> {
        KNOWN_EDUCATION
            .iter()
            .map(|(school, degree, field, start, end, domain, href)| EducationEntry {
                school: school.to_string(),
                degree: degree.to_string(),
                field_of_study: field.to_string(),
                start_date: start.to_string(),
                end_date: end.to_string(),
                logo_url: logo_url(domain),
                href: href.to_string(),
            })
            .collect()
    }

    fn skills(&self) -> Vec<String> {
        DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
    }
}

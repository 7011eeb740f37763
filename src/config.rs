use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_NAME: &str = "portfolio";
const ENV_PREFIX: &str = "PORTFOLIO";

/// Paths and last-resort literals for the pipeline.
///
/// Layered: built-in defaults, then `portfolio.toml` (or `--config`), then
/// `PORTFOLIO_*` environment variables (`__` separates nested keys).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub generated_path: PathBuf,
    pub overrides_path: PathBuf,
    pub defaults: ResolveDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("Linkedin Data"),
            generated_path: PathBuf::from("src/data/generated/linkedin.generated.json"),
            overrides_path: PathBuf::from("src/data/manual/overrides.json"),
            defaults: ResolveDefaults::default(),
        }
    }
}

/// Values used when neither the overrides nor the generated data have one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolveDefaults {
    pub initials: String,
    pub url: String,
    pub location_link: String,
    pub avatar_url: String,
    pub contact_email: String,
    pub tel: String,
}

impl Default for ResolveDefaults {
    fn default() -> Self {
        Self {
            initials: "NM".to_string(),
            url: "https://nakulmandhre.com".to_string(),
            location_link: "https://www.google.com/maps/place/atlanta".to_string(),
            avatar_url: "/me.png".to_string(),
            contact_email: "hello@example.com".to_string(),
            tel: "+1234567890".to_string(),
        }
    }
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };
        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("failed to load settings")?
            .try_deserialize()
            .context("invalid settings")
    }
}

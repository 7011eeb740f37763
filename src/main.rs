mod config;
mod error;
mod field;
mod model;
mod overrides;
mod parser;
mod resolve;
mod source;
mod store;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use parser::seed::CuratedSeed;

#[derive(Parser)]
#[command(name = "portfolio_data", about = "LinkedIn export → portfolio profile data")]
struct Cli {
    /// Settings file (default: ./portfolio.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the saved LinkedIn page
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Generated profile artifact
    #[arg(long, global = true)]
    generated: Option<PathBuf>,
    /// Hand-edited overrides document
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the saved LinkedIn page into the generated artifact
    Import {
        /// Use this HTML file instead of searching the data directory
        #[arg(short, long)]
        source: Option<PathBuf>,
    },
    /// Create or heal the overrides skeleton, keeping manual edits
    Skeleton,
    /// Print the resolved profile as JSON
    Resolve {
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
    /// List overrides still holding TODO: placeholders
    Pending,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }
    if let Some(path) = cli.generated {
        settings.generated_path = path;
    }
    if let Some(path) = cli.overrides {
        settings.overrides_path = path;
    }

    let result = match cli.command {
        Commands::Import { source } => import(&settings, source.as_deref()),
        Commands::Skeleton => skeleton(&settings),
        Commands::Resolve { compact } => {
            let generated = store::read_generated(&settings.generated_path)
                .context("generated profile is required; run `import` first")?;
            let manual = store::read_overrides(&settings.overrides_path)?;
            let profile = resolve::resolve(&generated, &manual, &settings.defaults);
            let text = if compact {
                serde_json::to_string(&profile)?
            } else {
                serde_json::to_string_pretty(&profile)?
            };
            println!("{}", text);
            Ok(())
        }
        Commands::Pending => {
            let Some(doc) = store::read_manual(&settings.overrides_path)? else {
                println!("No overrides at {}. Run 'skeleton' first.", settings.overrides_path.display());
                return Ok(());
            };
            let paths = overrides::pending::placeholder_paths(&doc);
            if paths.is_empty() {
                println!("No placeholders left.");
                return Ok(());
            }
            for path in &paths {
                println!("  {}", path);
            }
            println!("\n{} fields still need manual entry.", paths.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn import(settings: &Settings, explicit: Option<&Path>) -> anyhow::Result<()> {
    let path = match explicit {
        Some(path) => source::explicit_source(path)?,
        None => source::locate_source(&settings.data_dir)?,
    };

    let bytes = std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
    println!("File size: {:.2} MB", bytes.len() as f64 / 1024.0 / 1024.0);
    let html = String::from_utf8_lossy(&bytes);

    let source_file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let profile = parser::process_document(&html, &source_file, &CuratedSeed);
    store::write_json(&settings.generated_path, &profile)?;

    let id = &profile.identity;
    println!("Generated {}", settings.generated_path.display());
    println!("  Name:       {}", id.full_name);
    println!("  Headline:   {}", truncate(&id.headline, 50));
    println!("  Location:   {}", id.location);
    println!("  Experience: {} entries", profile.experience.len());
    println!("  Education:  {} entries", profile.education.len());
    println!("  Skills:     {} items", profile.skills.len());
    println!("  Projects:   {} (needs manual entry)", profile.projects.len());

    println!("\nNeeds manual review in {}:", settings.overrides_path.display());
    for item in [
        "Profile photo (replace /me.png)",
        "Social links (GitHub, Twitter, Email)",
        "Experience descriptions",
        "Projects",
        "Company logos",
    ] {
        println!("  - {}", item);
    }
    Ok(())
}

fn skeleton(settings: &Settings) -> anyhow::Result<()> {
    if settings.generated_path.exists() {
        println!("Found generated data at {}", settings.generated_path.display());
    } else {
        println!("Generated data not found. Run 'import' first; writing the default skeleton.");
    }

    let existing = store::read_manual(&settings.overrides_path)?;
    if existing.is_some() {
        println!("Found existing overrides, preserving manual edits");
    }
    let merged = overrides::skeleton::reconcile(existing.as_ref())
        .context("failed to build overrides skeleton")?;
    store::write_json(&settings.overrides_path, &merged)?;

    let pending = overrides::pending::placeholder_paths(&merged).len();
    println!("Written {} ({} placeholders left)", settings.overrides_path.display(), pending);
    println!("\nNext steps:");
    println!("  1. Open {}", settings.overrides_path.display());
    println!("  2. Replace all \"TODO:\" values with your actual data");
    println!("  3. Add your profile photo and company logos");
    println!("  4. Run 'resolve' to check the result");
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

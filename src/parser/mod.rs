pub mod extract;
pub mod outline;
pub mod seed;

use chrono::Utc;

use crate::model::GeneratedProfile;
use seed::SeedDataSource;

/// Two-pass pipeline: markup → outline → generated profile, with the seed as last resort.
pub fn process_document(
    html: &str,
    source_file: &str,
    seed: &dyn SeedDataSource,
) -> GeneratedProfile {
    let outline = outline::scan(html);
    extract::extract_all(html, &outline, source_file, seed, Utc::now())
}

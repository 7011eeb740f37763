use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::SourceError;

const MAIN_NAME_HINT: &str = "LinkedIn";
const BUNDLE_SUFFIX: &str = "_files";
const SAVED_RESOURCE_PREFIX: &str = "saved_resource";

/// Pick the HTML file to import from a browser "save page" directory.
///
/// The largest `saved_resource*.html` inside a `*_files` bundle holds the
/// rendered profile and wins over the top-level page.
pub fn locate_source(data_dir: &Path) -> Result<PathBuf, SourceError> {
    if !data_dir.is_dir() {
        return Err(SourceError::MissingDataDir(data_dir.to_path_buf()));
    }

    let main = find_main_html(data_dir)?;
    let bundle = find_bundle_html(data_dir, main.as_deref())?;
    debug!(main = ?main, bundle = ?bundle, "source candidates");

    let chosen = bundle
        .or(main)
        .ok_or_else(|| SourceError::NoHtml(data_dir.to_path_buf()))?;
    info!("Source file: {}", chosen.display());
    Ok(chosen)
}

/// Accept an explicitly named source, or fail like a missing one.
pub fn explicit_source(path: &Path) -> Result<PathBuf, SourceError> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(SourceError::NotFound(path.to_path_buf()))
    }
}

fn find_main_html(dir: &Path) -> Result<Option<PathBuf>, SourceError> {
    let html: Vec<PathBuf> = sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_file() && has_html_ext(p))
        .collect();

    let preferred = html.iter().find(|p| {
        let name = file_name(p);
        name.contains(MAIN_NAME_HINT) && !name.contains(BUNDLE_SUFFIX)
    });
    Ok(preferred.or(html.first()).cloned())
}

fn find_bundle_html(dir: &Path, main: Option<&Path>) -> Result<Option<PathBuf>, SourceError> {
    let bundles: Vec<PathBuf> = sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_dir() && file_name(p).ends_with(BUNDLE_SUFFIX))
        .collect();

    // The bundle a browser writes next to "<stem>.html" is "<stem>_files".
    let expected = main
        .and_then(|m| m.file_stem())
        .map(|stem| format!("{}{}", stem.to_string_lossy(), BUNDLE_SUFFIX));
    let bundle = expected
        .and_then(|name| bundles.iter().find(|b| file_name(b) == name))
        .or(bundles.first());

    let Some(bundle) = bundle else {
        return Ok(None);
    };

    let mut best: Option<(u64, PathBuf)> = None;
    for path in sorted_entries(bundle)? {
        if !path.is_file()
            || !has_html_ext(&path)
            || !file_name(&path).starts_with(SAVED_RESOURCE_PREFIX)
        {
            continue;
        }
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        if best.as_ref().map_or(true, |(s, _)| size > *s) {
            best = Some((size, path));
        }
    }
    Ok(best.map(|(_, p)| p))
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let io_err = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        paths.push(entry.map_err(io_err)?.path());
    }
    paths.sort();
    Ok(paths)
}

fn has_html_ext(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("html")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, bytes: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x".repeat(bytes)).unwrap();
    }

    #[test]
    fn missing_dir_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let err = locate_source(&tmp.path().join("Linkedin Data")).unwrap_err();
        assert!(matches!(err, SourceError::MissingDataDir(_)));
    }

    #[test]
    fn empty_dir_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("notes.txt"), "hi").unwrap();
        let err = locate_source(tmp.path()).unwrap_err();
        assert!(matches!(err, SourceError::NoHtml(_)));
    }

    #[test]
    fn prefers_named_main_page() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("a.html"), 10);
        write(&tmp.path().join("Jane Doe _ LinkedIn.html"), 5);
        let chosen = locate_source(tmp.path()).unwrap();
        assert_eq!(file_name(&chosen), "Jane Doe _ LinkedIn.html");
    }

    #[test]
    fn falls_back_to_first_html() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("b.html"), 10);
        write(&tmp.path().join("a.html"), 5);
        assert_eq!(file_name(&locate_source(tmp.path()).unwrap()), "a.html");
    }

    #[test]
    fn largest_saved_resource_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = tmp.path().join("Jane Doe _ LinkedIn_files");
        write(&tmp.path().join("Jane Doe _ LinkedIn.html"), 50);
        write(&bundle.join("saved_resource.html"), 100);
        write(&bundle.join("saved_resource(5).html"), 900);
        write(&bundle.join("saved_resource(6).html"), 300);
        write(&bundle.join("huge_widget.html"), 5000);
        let chosen = locate_source(tmp.path()).unwrap();
        assert_eq!(file_name(&chosen), "saved_resource(5).html");
    }

    #[test]
    fn bundle_without_main_page() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("Someone_files").join("saved_resource(1).html"), 10);
        let chosen = locate_source(tmp.path()).unwrap();
        assert_eq!(file_name(&chosen), "saved_resource(1).html");
    }

    #[test]
    fn explicit_source_must_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("profile.html");
        assert!(matches!(explicit_source(&path), Err(SourceError::NotFound(_))));
        write(&path, 1);
        assert_eq!(explicit_source(&path).unwrap(), path);
    }
}

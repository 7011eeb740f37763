use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::StoreError;
use crate::model::GeneratedProfile;
use crate::overrides::schema::OverrideDocument;

pub fn read_generated(path: &Path) -> Result<GeneratedProfile, StoreError> {
    read_json(path)
}

/// The raw overrides tree, or `None` when the file does not exist yet.
pub fn read_manual(path: &Path) -> Result<Option<Value>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let value: Value = read_json(path)?;
    if !value.is_object() {
        return Err(StoreError::NotAnObject(path.to_path_buf()));
    }
    Ok(Some(value))
}

/// The typed overrides document; a missing file reads as empty.
pub fn read_overrides(path: &Path) -> Result<OverrideDocument, StoreError> {
    match read_manual(path)? {
        Some(value) => serde_json::from_value(value).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(OverrideDocument::default()),
    }
}

/// Pretty-print with a trailing newline, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut text = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');

    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    fs::write(path, text).map_err(write_err)?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use serde_json::json;

    #[test]
    fn write_creates_parents_and_reads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("src/data/manual/overrides.json");
        write_json(&path, &json!({"skills": ["Rust"]})).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"skills\""));
        assert_eq!(read_manual(&path).unwrap(), Some(json!({"skills": ["Rust"]})));
    }

    #[test]
    fn missing_manual_reads_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("overrides.json");
        assert_eq!(read_manual(&path).unwrap(), None);
        assert_eq!(read_overrides(&path).unwrap(), OverrideDocument::default());
    }

    #[test]
    fn manual_must_be_an_object() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("overrides.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(read_manual(&path), Err(StoreError::NotAnObject(_))));
    }

    #[test]
    fn broken_json_is_a_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("overrides.json");
        fs::write(&path, "{ \"identity\": ").unwrap();
        assert!(matches!(read_manual(&path), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn typed_overrides() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("overrides.json");
        fs::write(&path, r#"{"identity": {"headline": "TODO: write this"}}"#).unwrap();
        let doc = read_overrides(&path).unwrap();
        assert_eq!(doc.identity.headline, Field::Placeholder("TODO: write this".into()));
    }

    #[test]
    fn missing_generated_is_a_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_generated(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }
}

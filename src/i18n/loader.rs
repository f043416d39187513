//! Locale file loading.

use crate::i18n::LanguageTable;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while reading a locale file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("locale file not found: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON object of string-to-string objects
    #[error("failed to parse locale file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a locale file.
///
/// # Arguments
/// * `path` - Path to a JSON document shaped `{"group": {"word": "translation"}}`
///
/// # Returns
/// The parsed `LanguageTable`, with groups and words in document order.
pub fn load_language_table(path: &Path) -> Result<LanguageTable, LoadError> {
    debug!("Reading locale file {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| LoadError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_language_table(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Loaded {} ({} groups, {} words)",
        path.display(),
        table.len(),
        table.word_count()
    );

    Ok(table)
}

/// Parse a locale document held in memory.
pub fn parse_language_table(contents: &str) -> Result<LanguageTable, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Serialize a table back to pretty-printed JSON.
pub fn to_json_string(table: &LanguageTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("fi.json");
        fs::write(&path, r#"{"greetings": {"hello": "Hei"}}"#).expect("write");

        let table = load_language_table(&path).expect("should load");
        assert_eq!(table.translation("greetings", "hello"), Some("Hei"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nope.json");

        let err = load_language_table(&path).unwrap_err();
        assert!(matches!(err, LoadError::ResourceNotFound { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"greetings": {"hello": "Hei""#).expect("write");

        let err = load_language_table(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_non_string_translation() {
        let result = parse_language_table(r#"{"greetings": {"count": 3}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_flat_document() {
        let result = parse_language_table(r#"{"hello": "Hei"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_top_level_array() {
        let result = parse_language_table(r#"[{"hello": "Hei"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_object() {
        let table = parse_language_table("{}").expect("should parse");
        assert!(table.is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let original = parse_language_table(
            r#"{"greetings": {"hello": "Hei", "bye": "Heippa"}, "menu": {"open": "Avaa"}}"#,
        )
        .expect("should parse");

        let json = to_json_string(&original).expect("serialize");
        let restored = parse_language_table(&json).expect("reparse");

        assert_eq!(original, restored);
    }
}

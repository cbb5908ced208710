/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use refgen_core::metadata::CrossrefWork;
use refgen_core::Source;
use tracing::debug;

use crate::ProcessorError;

/// Load records from a file given its path.
/// JSON when the extension is `.json`, YAML otherwise. The file may hold a
/// list of records or a single record.
pub fn load_sources(path: &Path) -> Result<Vec<Source>, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    debug!(path = %path.display(), ext, "loading records");

    let sources = match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;

            if let Ok(sources) = serde_json::from_slice::<Vec<Source>>(&bytes) {
                sources
            } else {
                let source = serde_json::from_slice::<Source>(&bytes)
                    .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;
                vec![source]
            }
        }
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;

            if let Ok(sources) = serde_yaml::from_str::<Vec<Source>>(&content) {
                sources
            } else {
                let source = serde_yaml::from_str::<Source>(&content)
                    .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;
                vec![source]
            }
        }
    };

    debug!(count = sources.len(), "loaded records");
    Ok(sources)
}

/// Load a saved Crossref `/works` response (full envelope or bare message).
pub fn load_crossref(path: &Path) -> Result<CrossrefWork, ProcessorError> {
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading Crossref response");
    Ok(CrossrefWork::from_json(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_yaml_list() {
        let file = write_temp(
            ".yaml",
            r#"
- type: book
  authors:
    - firstName: Thomas
      lastName: Kuhn
  year: "1962"
  title: The structure of scientific revolutions
  publisher: University of Chicago Press
- type: ai
  company: OpenAI
  year: "2023"
"#,
        );
        let sources = load_sources(file.path()).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].authors()[0].last_name, "Kuhn");
    }

    #[test]
    fn loads_single_json_record() {
        let file = write_temp(".json", r#"{"type": "website", "title": "Moon", "year": "2007"}"#);
        let sources = load_sources(file.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].title(), "Moon");
    }

    #[test]
    fn syntax_error_is_reported() {
        let file = write_temp(".json", r#"{"type": "website", "#);
        let err = load_sources(file.path()).unwrap_err();
        assert!(matches!(err, ProcessorError::ParseError(ref f, _) if f == "JSON"));
    }

    #[test]
    fn unknown_variant_is_reported() {
        let file = write_temp(".yaml", "type: podcast\ntitle: Episode 1\n");
        let err = load_sources(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse YAML"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_sources(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ProcessorError::Io(_)));
    }

    #[test]
    fn loads_crossref_message() {
        let file = write_temp(
            ".json",
            r#"{"message": {"title": ["A title"], "author": [{"given": "Ann", "family": "Lee"}]}}"#,
        );
        let work = load_crossref(file.path()).unwrap();
        assert_eq!(work.title, vec!["A title".to_string()]);
        assert_eq!(work.author.len(), 1);
    }
}

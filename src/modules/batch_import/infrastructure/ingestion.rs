use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Why an input source could not be turned into text. Shown inline by the
/// shell; never changes dialog state.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum IngestionError {
    #[error("Unsupported file type: '{0}' is not a JSON file")]
    UnsupportedFileType(String),

    #[error("Failed to read file: {0}")]
    ReadFailure(String),
}

/// One file from a drop event, with whatever media type the event declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub path: PathBuf,
    pub media_type: Option<String>,
}

impl DroppedFile {
    fn is_json(&self) -> bool {
        self.media_type.as_deref() == Some("application/json")
            || self
                .path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
    }

    fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// The three ways content reaches the import dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionSource {
    /// Drag-and-drop; only the first file is considered
    DroppedFiles(Vec<DroppedFile>),
    /// Clipboard plain-text payload
    PastedText(String),
    /// File chosen through the picker, which already constrains the type
    PickedFile(PathBuf),
}

/// Normalize any input source into one raw-text value.
///
/// `Ok(None)` means the event carried nothing to act on (empty drop list,
/// empty clipboard) and is not an error. Dropped files are type-checked
/// before the read; picked files are not.
pub async fn read_source(source: &IngestionSource) -> Result<Option<String>, IngestionError> {
    match source {
        IngestionSource::DroppedFiles(files) => match files.first() {
            None => Ok(None),
            Some(file) if !file.is_json() => {
                Err(IngestionError::UnsupportedFileType(file.display_name()))
            }
            Some(file) => read_file_text(&file.path).await.map(Some),
        },
        IngestionSource::PastedText(text) => {
            if text.is_empty() {
                Ok(None)
            } else {
                Ok(Some(text.clone()))
            }
        }
        IngestionSource::PickedFile(path) => read_file_text(path).await.map(Some),
    }
}

async fn read_file_text(path: &Path) -> Result<String, IngestionError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|err| IngestionError::ReadFailure(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static FILE_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_json_file(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "kanri-ingestion-{}-{}.json",
            std::process::id(),
            FILE_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::write(&path, content).expect("write temp file");
        path
    }

    #[tokio::test]
    async fn dropped_json_file_is_read_as_text() {
        let path = temp_json_file(r#"{"accounts": []}"#);
        let source = IngestionSource::DroppedFiles(vec![DroppedFile {
            path: path.clone(),
            media_type: Some("application/json".to_string()),
        }]);

        let text = read_source(&source).await.unwrap();
        assert_eq!(text.as_deref(), Some(r#"{"accounts": []}"#));
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn json_extension_is_enough_without_a_media_type() {
        let path = temp_json_file("{}");
        let source = IngestionSource::DroppedFiles(vec![DroppedFile {
            path: path.clone(),
            media_type: None,
        }]);

        assert!(read_source(&source).await.unwrap().is_some());
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn non_json_drop_is_refused_before_any_read() {
        let source = IngestionSource::DroppedFiles(vec![DroppedFile {
            path: PathBuf::from("accounts.csv"),
            media_type: Some("text/csv".to_string()),
        }]);

        assert_eq!(
            read_source(&source).await,
            Err(IngestionError::UnsupportedFileType(
                "accounts.csv".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn empty_drop_list_is_a_no_op() {
        let source = IngestionSource::DroppedFiles(vec![]);
        assert_eq!(read_source(&source).await, Ok(None));
    }

    #[tokio::test]
    async fn empty_paste_is_a_no_op_but_text_passes_through() {
        assert_eq!(
            read_source(&IngestionSource::PastedText(String::new())).await,
            Ok(None)
        );
        assert_eq!(
            read_source(&IngestionSource::PastedText("{}".to_string())).await,
            Ok(Some("{}".to_string()))
        );
    }

    #[tokio::test]
    async fn picked_file_skips_the_type_filter() {
        let path = temp_json_file("{}");
        // Same content behind an extension the drop path would refuse.
        let odd_path = path.with_extension("txt");
        std::fs::rename(&path, &odd_path).unwrap();

        let picked = read_source(&IngestionSource::PickedFile(odd_path.clone())).await;
        assert_eq!(picked, Ok(Some("{}".to_string())));
        std::fs::remove_file(odd_path).ok();
    }

    #[tokio::test]
    async fn missing_file_reports_read_failure() {
        let source = IngestionSource::PickedFile(PathBuf::from(
            "/nonexistent/kanri-missing-export.json",
        ));
        assert!(matches!(
            read_source(&source).await,
            Err(IngestionError::ReadFailure(_))
        ));
    }
}

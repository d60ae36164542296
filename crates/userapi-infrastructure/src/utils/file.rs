//! Async file I/O utilities
//!
//! JSON document read/write helpers shared by the store and health checks.

use std::path::Path;
use userapi_domain::error::{Error, Result};

/// Async file utilities for whole-document JSON persistence
pub struct FileUtils;

impl FileUtils {
    /// Serialize `value` as pretty JSON and replace the file contents
    ///
    /// Parent directories are created when missing.
    ///
    /// # Arguments
    /// * `path` - The file path to write to
    /// * `value` - The value to serialize and write
    /// * `context` - Description for error messages (e.g. "user data file")
    pub async fn write_json<T: serde::Serialize, P: AsRef<Path>>(
        path: P,
        value: &T,
        context: &str,
    ) -> Result<()> {
        let content = serde_json::to_string_pretty(value).map_err(|e| Error::Infrastructure {
            message: format!("Failed to serialize {context}: {e}"),
            source: Some(Box::new(e)),
        })?;

        if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(format!("Failed to create directory for {context}"), e)
            })?;
        }

        tokio::fs::write(path.as_ref(), content)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to write {context}"), e))
    }

    /// Read and parse a JSON file, `None` when the file does not exist
    pub async fn read_json_if_exists<T: serde::de::DeserializeOwned, P: AsRef<Path>>(
        path: P,
        context: &str,
    ) -> Result<Option<T>> {
        let content = match tokio::fs::read_to_string(path.as_ref()).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io_with_source(format!("Failed to read {context}"), e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| Error::Infrastructure {
                message: format!("Failed to parse {context}: {e}"),
                source: Some(Box::new(e)),
            })
    }
}

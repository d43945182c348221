use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Flat-file JSON storage: one `db_<table>.json` array per table, re-read
/// on every request.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Reads a whole table. Read and parse failures come back as
    /// `DataUnavailable`, never disguised as table contents.
    pub async fn read_table<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, AppError> {
        let path = self.data_dir.join(format!("db_{table}.json"));

        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            AppError::DataUnavailable(format!(
                "cannot read table '{table}' at {}: {e}",
                path.display()
            ))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::DataUnavailable(format!("table '{table}' is not valid JSON: {e}"))
        })
    }
}

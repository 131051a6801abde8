use std::path::Path;

use anyhow::{Context, Result};

impl crate::LineshardFS {
    pub fn is_file<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().is_file()
    }

    pub async fn file_size<T: AsRef<Path>>(path: T) -> Result<u64> {
        let metadata = tokio::fs::metadata(path.as_ref())
            .await
            .with_context(|| format!("Failed to read metadata of {}", path.as_ref().display()))?;
        Ok(metadata.len())
    }
}

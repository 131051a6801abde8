use std::path::PathBuf;

use anyhow::{Result, bail};
use lineshard_domain::{Partition, PartitionConfig, PartitionInfo};
use lineshard_fs::LineshardFS;
use serde::Serialize;

/// Everything the CLI prints about one partitioned file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub size: u64,
    pub requested: usize,
    pub partitions: Vec<Partition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspected: Option<Vec<PartitionInfo>>,
}

impl Report {
    /// Partitions the file at `path` and, when `inspect` is set, reads the
    /// first line of every partition.
    pub async fn collect(path: PathBuf, config: PartitionConfig, inspect: bool) -> Result<Self> {
        if !LineshardFS::is_file(&path) {
            bail!("{} is not a file", path.display());
        }

        let size = LineshardFS::file_size(&path).await?;
        let requested = config.workers;
        let partitions = LineshardFS::partition(&path, config).await?;
        let inspected = if inspect {
            Some(LineshardFS::inspect(&path, &partitions).await?)
        } else {
            None
        };

        Ok(Self { path, size, requested, partitions, inspected })
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use lineshard_domain::{Partition, PartitionConfig, PartitionLogger, Partitioner, TracingLogger};

impl crate::LineshardFS {
    /// Splits the file at `path` into partitions that never cut a line.
    ///
    /// The search runs on a blocking thread because it uses positional reads
    /// on a standard file handle.
    pub async fn partition<T: AsRef<Path>>(
        path: T,
        config: PartitionConfig,
    ) -> Result<Vec<Partition>> {
        Self::partition_with_logger(path, config, TracingLogger).await
    }

    /// Same as [`Self::partition`], sending search diagnostics to `logger`.
    pub async fn partition_with_logger<T, L>(
        path: T,
        config: PartitionConfig,
        logger: L,
    ) -> Result<Vec<Partition>>
    where
        T: AsRef<Path>,
        L: PartitionLogger + Send + 'static,
    {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open file {}", path.display()))?
            .into_std()
            .await;

        let partitions = tokio::task::spawn_blocking(move || {
            Partitioner::new(config)
                .with_logger(logger)
                .find_partitions(&file)
        })
        .await
        .context("Partition search was aborted")?
        .with_context(|| format!("Failed to partition file {}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            partitions = partitions.len(),
            "Partitioned file"
        );

        Ok(partitions)
    }
}

use std::io::SeekFrom;
use std::path::Path;

use anyhow::{Context, Result};
use lineshard_domain::{Inspector, Partition, PartitionInfo};
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::error::Error;

impl crate::LineshardFS {
    /// Reads the bytes of a single partition through a dedicated file handle.
    ///
    /// # Arguments
    /// * `path` - Path to the partitioned file
    /// * `partition` - Range to read, as returned by
    ///   [`crate::LineshardFS::partition`]
    ///
    /// Fails when the partition lies outside of the file or the file shrank
    /// while reading.
    pub async fn read_partition<T: AsRef<Path>>(path: T, partition: &Partition) -> Result<Vec<u8>> {
        let path_ref = path.as_ref();
        let mut file = Self::open_within(path_ref, std::slice::from_ref(partition)).await?;
        file.seek(SeekFrom::Start(partition.offset))
            .await
            .with_context(|| format!("Failed to seek in {}", path_ref.display()))?;

        let mut content = Vec::new();
        (&mut file)
            .take(partition.length)
            .read_to_end(&mut content)
            .await
            .with_context(|| format!("Failed to read partition from {}", path_ref.display()))?;

        let actual = content.len() as u64;
        if actual < partition.length {
            return Err(Error::ShortRead {
                offset: partition.offset,
                expected: partition.length,
                actual,
            }
            .into());
        }

        Ok(content)
    }

    /// Returns the first line of `partition` without its line terminator.
    ///
    /// The line never extends past the end of the partition and is cut off
    /// after 64 KiB.
    pub async fn first_line<T: AsRef<Path>>(path: T, partition: &Partition) -> Result<String> {
        let infos = Self::inspect(path, std::slice::from_ref(partition)).await?;
        Ok(infos
            .into_iter()
            .next()
            .map(|info| info.first_line)
            .unwrap_or_default())
    }

    /// Reports offset, length and first line of every partition.
    ///
    /// The lines are read with positional reads on a blocking thread, so the
    /// file can be inspected while workers read it.
    pub async fn inspect<T: AsRef<Path>>(
        path: T,
        partitions: &[Partition],
    ) -> Result<Vec<PartitionInfo>> {
        let path = path.as_ref();
        let file = Self::open_within(path, partitions).await?.into_std().await;
        let partitions = partitions.to_vec();

        let infos = tokio::task::spawn_blocking(move || {
            Inspector::default().inspect(&file, &partitions)
        })
        .await
        .context("Partition inspection was aborted")?
        .with_context(|| format!("Failed to inspect partitions of {}", path.display()))?;

        for info in &infos {
            tracing::debug!(
                index = info.index,
                offset = info.offset,
                length = info.length,
                first_line = %info.first_line,
                "Partition"
            );
        }
        Ok(infos)
    }

    /// Opens `path` after checking that every partition fits into the file.
    async fn open_within(path: &Path, partitions: &[Partition]) -> Result<tokio::fs::File> {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open file {}", path.display()))?;

        let size = file
            .metadata()
            .await
            .with_context(|| format!("Failed to read metadata of {}", path.display()))?
            .len();

        for partition in partitions {
            if partition.checked_end().is_none_or(|end| end > size) {
                return Err(Error::PartitionOutOfBounds {
                    start: partition.offset,
                    end: partition.offset.saturating_add(partition.length),
                    size,
                }
                .into());
            }
        }

        Ok(file)
    }
}

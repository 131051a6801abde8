use derive_setters::Setters;
use memchr::memchr;
use serde::Serialize;

use crate::{ByteSource, Error, Partition, Result};

/// What a partition looks like from the outside: where it starts, how long
/// it is and which line it begins with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionInfo {
    pub index: usize,
    pub offset: u64,
    pub length: u64,
    pub first_line: String,
}

/// Reads the first line of every partition for human inspection.
///
/// Uses positional reads only, so it can run while workers are reading the
/// same source.
#[derive(Debug, Clone, Setters)]
#[setters(into)]
pub struct Inspector {
    /// Longest first line reported; longer lines are cut off
    pub max_line: usize,

    /// Bytes read per call while searching for the end of the first line
    pub chunk_size: usize,
}

impl Default for Inspector {
    fn default() -> Self {
        Self { max_line: 64 * 1024, chunk_size: 4096 }
    }
}

impl Inspector {
    pub fn inspect<S: ByteSource + ?Sized>(
        &self,
        source: &S,
        partitions: &[Partition],
    ) -> Result<Vec<PartitionInfo>> {
        partitions
            .iter()
            .enumerate()
            .map(|(index, partition)| -> Result<PartitionInfo> {
                Ok(PartitionInfo {
                    index,
                    offset: partition.offset,
                    length: partition.length,
                    first_line: self.first_line(source, partition)?,
                })
            })
            .collect()
    }

    /// First line of `partition` without its line terminator, never reading
    /// past the end of the partition.
    pub fn first_line<S: ByteSource + ?Sized>(
        &self,
        source: &S,
        partition: &Partition,
    ) -> Result<String> {
        let limit = usize::try_from(partition.length)
            .unwrap_or(usize::MAX)
            .min(self.max_line);
        let mut line = Vec::new();
        let mut buf = vec![0u8; self.chunk_size.clamp(1, limit.max(1))];

        while line.len() < limit {
            let offset = partition.offset + line.len() as u64;
            let want = buf.len().min(limit - line.len());
            let read = source
                .read_window(&mut buf[..want], offset)
                .map_err(|source| Error::Read { offset, source })?;
            let chunk = &buf[..read];

            if let Some(position) = memchr(b'\n', chunk) {
                line.extend_from_slice(&chunk[..position]);
                break;
            }
            line.extend_from_slice(chunk);
            if read < want {
                break;
            }
        }

        if line.last() == Some(&b'\r') {
            line.pop();
        }

        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

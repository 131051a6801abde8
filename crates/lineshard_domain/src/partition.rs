use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A contiguous byte range of a file assigned to a single worker.
///
/// A worker starts reading at `offset` and reads exactly `length` bytes.
/// Partitions produced by the [`Partitioner`](crate::Partitioner) never split a
/// line, so workers that stay inside their own range can process the same file
/// concurrently without coordination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Partition {
    /// Absolute offset of the first byte, counted from the start of the file
    pub offset: u64,

    /// Number of bytes covered by this partition
    pub length: u64,
}

impl Partition {
    pub fn new(offset: u64, length: u64) -> Self {
        Self { offset, length }
    }

    /// Exclusive end offset of the range
    pub fn end(&self) -> u64 {
        self.offset + self.length
    }

    /// Exclusive end offset, or `None` when it does not fit into a `u64`.
    /// Use this for partitions that did not come from a
    /// [`Partitioner`](crate::Partitioner).
    pub fn checked_end(&self) -> Option<u64> {
        self.offset.checked_add(self.length)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }
}

impl From<Partition> for Range<u64> {
    fn from(partition: Partition) -> Self {
        partition.range()
    }
}

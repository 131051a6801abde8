mod error;
mod meta;
mod partition;
mod read_range;

pub use error::Error;
pub use lineshard_domain::{Partition, PartitionConfig, PartitionInfo};

/// Path based entry points for partitioning files on disk and reading the
/// resulting partitions.
///
/// Every call opens its own file handle, so calls for different partitions
/// can run concurrently without sharing a cursor.
pub struct LineshardFS;

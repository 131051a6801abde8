#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Partition {start}..{end} lies outside of the file of {size} bytes")]
    PartitionOutOfBounds { start: u64, end: u64, size: u64 },

    #[error("Expected {expected} bytes from partition at offset {offset} but read {actual}")]
    ShortRead {
        offset: u64,
        expected: u64,
        actual: u64,
    },
}

use std::num::NonZeroUsize;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Default size of the lookahead window in bytes.
pub const DEFAULT_LOOKAHEAD: usize = 50;

/// Configuration for a single partition search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(strip_option, into)]
#[serde(default)]
pub struct PartitionConfig {
    /// Intended number of partitions. Fewer are returned when the file is too
    /// small to give every worker at least one line.
    pub workers: usize,

    /// Initial number of bytes read after a nominal boundary while searching
    /// for the next newline
    pub lookahead: usize,

    /// Upper bound for the lookahead window while it grows (None for
    /// unlimited)
    pub max_lookahead: Option<usize>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            lookahead: DEFAULT_LOOKAHEAD,
            max_lookahead: None,
        }
    }
}

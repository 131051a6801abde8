use std::io;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid worker count {0}: at least one worker is required")]
    InvalidWorkerCount(usize),

    #[error("Invalid lookahead window of {0} bytes: the window must hold at least one byte")]
    InvalidLookahead(usize),

    #[error("Failed to determine the size of the source")]
    SourceUnavailable(#[source] io::Error),

    #[error("Failed to read from the source at offset {offset}")]
    Read {
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("No newline found within {searched} bytes after offset {offset}")]
    NoNewline { offset: u64, searched: usize },
}

pub type Result<A> = std::result::Result<A, Error>;

mod config;
mod error;
mod inspect;
mod logger;
mod partition;
mod partitioner;
mod source;

pub use config::*;
pub use error::*;
pub use inspect::*;
pub use logger::*;
pub use partition::*;
pub use partitioner::*;
pub use source::*;

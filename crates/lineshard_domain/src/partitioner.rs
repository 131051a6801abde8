use std::time::Instant;

use memchr::memchr;

use crate::{
    ByteSource, Error, Partition, PartitionConfig, PartitionLogger, Result, TracingLogger,
};

// Upper bound for the up-front allocation; huge worker counts on small files
// produce only a handful of partitions.
const MAX_PREALLOCATED: usize = 1024;

/// Splits a newline-delimited source into byte ranges of roughly equal size.
///
/// Every boundary between two partitions sits right after a `\n`, so no line
/// is ever split across workers. The last partition absorbs the rounding
/// remainder and ends at the end of the source.
#[derive(Debug, Clone)]
pub struct Partitioner<L = TracingLogger> {
    config: PartitionConfig,
    logger: L,
}

impl Partitioner {
    pub fn new(config: PartitionConfig) -> Self {
        Self { config, logger: TracingLogger }
    }
}

impl<L: PartitionLogger> Partitioner<L> {
    /// Replaces the logger that receives the search diagnostics
    pub fn with_logger<T: PartitionLogger>(self, logger: T) -> Partitioner<T> {
        Partitioner { config: self.config, logger }
    }

    /// Finds a partition distribution for `source` with at most
    /// `config.workers` partitions.
    ///
    /// Fewer partitions are returned when the source is too small for the
    /// requested worker count. An empty source yields a single empty partition.
    ///
    /// # Errors
    /// * [`Error::InvalidWorkerCount`] / [`Error::InvalidLookahead`] for a
    ///   zero worker count or lookahead window
    /// * [`Error::SourceUnavailable`] when the size cannot be determined
    /// * [`Error::Read`] when a lookahead read fails
    /// * [`Error::NoNewline`] when `max_lookahead` is reached without finding
    ///   a newline
    pub fn find_partitions<S: ByteSource + ?Sized>(&self, source: &S) -> Result<Vec<Partition>> {
        let started = Instant::now();
        let result = self.search(source);
        self.logger
            .info(format_args!("finding partitions took {:?}", started.elapsed()));
        result
    }

    fn search<S: ByteSource + ?Sized>(&self, source: &S) -> Result<Vec<Partition>> {
        let workers = self.config.workers;
        if workers == 0 {
            return Err(Error::InvalidWorkerCount(workers));
        }
        if self.config.lookahead == 0 {
            return Err(Error::InvalidLookahead(self.config.lookahead));
        }

        let total = source.size().map_err(Error::SourceUnavailable)?;
        self.logger.info(format_args!("total file size: {total}"));

        if total == 0 {
            return Ok(vec![Partition::new(0, 0)]);
        }

        let partition_size = total / workers as u64;
        self.logger.info(format_args!(
            "size for each worker approximately: {partition_size}"
        ));

        let mut partitions = Vec::with_capacity(workers.min(MAX_PREALLOCATED));
        let mut start = 0;
        let mut end = partition_size;

        for idx in 0..workers {
            // Earlier boundaries already reached the end of the source
            if start == total {
                break;
            }

            // The last partition compensates for the line overflows of all
            // previous ones.
            if idx == workers - 1 {
                partitions.push(Partition::new(start, total - start));
                break;
            }

            match self.find_boundary(source, idx, start, end, total)? {
                Some(boundary) => {
                    partitions.push(Partition::new(start, boundary - start));
                    start = boundary;
                    end = boundary.saturating_add(partition_size);
                }
                None => {
                    self.logger.debug(format_args!(
                        "reached end of file while searching for partition={idx}, using {} partitions",
                        idx + 1
                    ));
                    partitions.push(Partition::new(start, total - start));
                    break;
                }
            }
        }

        Ok(partitions)
    }

    /// Returns the offset right after the first newline at or after
    /// `nominal`, or `None` when the initial lookahead window runs into the
    /// end of the source or no newline follows `nominal` at all.
    fn find_boundary<S: ByteSource + ?Sized>(
        &self,
        source: &S,
        idx: usize,
        start: u64,
        nominal: u64,
        total: u64,
    ) -> Result<Option<u64>> {
        let mut window = self.config.lookahead;
        let mut searched = 0;
        let mut buf = Vec::new();

        loop {
            let offset = nominal + searched as u64;
            let wanted = window - searched;
            let remaining = usize::try_from(total.saturating_sub(offset)).unwrap_or(usize::MAX);
            buf.resize(wanted.min(remaining), 0);

            let read = source
                .read_window(&mut buf, offset)
                .map_err(|source| Error::Read { offset, source })?;
            let chunk = &buf[..read];

            self.logger.debug(format_args!(
                "searching for partition={idx}. start={start} end={nominal}. lookahead at {offset} is {:?}",
                String::from_utf8_lossy(&chunk[..chunk.len().min(self.config.lookahead)])
            ));

            // A short first window means the end of the source lies within
            // the lookahead, which ends the search regardless of its content.
            if searched == 0 && read < wanted {
                return Ok(None);
            }

            if let Some(position) = memchr(b'\n', chunk) {
                let skip = searched + position + 1;
                self.logger
                    .debug(format_args!("adding skip={skip} for partition={idx}"));
                return Ok(Some(nominal + skip as u64));
            }

            if read < wanted {
                return Ok(None);
            }

            searched = window;
            window = match self.config.max_lookahead {
                Some(max) if window >= max => {
                    return Err(Error::NoNewline { offset: nominal, searched });
                }
                Some(max) => window.saturating_mul(2).min(max),
                None => window.saturating_mul(2),
            };

            self.logger.debug(format_args!(
                "no newline within {searched} bytes for partition={idx}, growing lookahead to {window}"
            ));
        }
    }
}

/// Partitions `source` into at most `workers` ranges with the default
/// lookahead window, logging through `tracing`.
pub fn find_partitions<S: ByteSource + ?Sized>(
    source: &S,
    workers: usize,
) -> Result<Vec<Partition>> {
    Partitioner::new(PartitionConfig::default().workers(workers)).find_partitions(source)
}

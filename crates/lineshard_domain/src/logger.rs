use std::fmt;
use std::sync::Arc;

/// Receives the diagnostic messages emitted during a partition search.
///
/// Implementations must not block for long and must never fail; the messages
/// have no influence on the computed partitions.
pub trait PartitionLogger {
    fn info(&self, args: fmt::Arguments<'_>);
    fn debug(&self, args: fmt::Arguments<'_>);
}

/// Forwards messages to `tracing` under the `lineshard` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl PartitionLogger for TracingLogger {
    fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(target: "lineshard", "{args}");
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(target: "lineshard", "{args}");
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl PartitionLogger for NoopLogger {
    fn info(&self, _: fmt::Arguments<'_>) {}
    fn debug(&self, _: fmt::Arguments<'_>) {}
}

impl<T: PartitionLogger + ?Sized> PartitionLogger for &T {
    fn info(&self, args: fmt::Arguments<'_>) {
        (**self).info(args)
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        (**self).debug(args)
    }
}

impl<T: PartitionLogger + ?Sized> PartitionLogger for Arc<T> {
    fn info(&self, args: fmt::Arguments<'_>) {
        (**self).info(args)
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        (**self).debug(args)
    }
}

//! Invariants every partition list must satisfy, independent of content,
//! worker count and lookahead size.

use lineshard_domain::{NoopLogger, Partition, PartitionConfig, Partitioner};
use proptest::prelude::*;

fn partition(data: &[u8], workers: usize, lookahead: usize) -> Vec<Partition> {
    Partitioner::new(
        PartitionConfig::default()
            .workers(workers)
            .lookahead(lookahead),
    )
    .with_logger(NoopLogger)
    .find_partitions(data)
    .expect("partitioning an in-memory source never fails")
}

/// Text made of `lines` joined by `\n`, optionally terminated by one.
fn text() -> impl Strategy<Value = Vec<u8>> {
    (prop::collection::vec("[a-z ]{0,80}", 0..60), any::<bool>()).prop_map(
        |(lines, trailing_newline)| {
            let mut text = lines.join("\n");
            if trailing_newline && !text.is_empty() {
                text.push('\n');
            }
            text.into_bytes()
        },
    )
}

/// Offset right after the first newline at or after `nominal`.
fn next_boundary(data: &[u8], nominal: u64) -> Option<u64> {
    let rest = data.get(usize::try_from(nominal).ok()?..)?;
    let position = rest.iter().position(|&byte| byte == b'\n')?;
    Some(nominal + position as u64 + 1)
}

#[track_caller]
fn assert_covering(data: &[u8], partitions: &[Partition]) {
    let total = data.len() as u64;

    assert!(!partitions.is_empty());
    assert_eq!(partitions[0].offset, 0);
    assert_eq!(partitions.last().map(Partition::end), Some(total));
    assert_eq!(partitions.iter().map(|p| p.length).sum::<u64>(), total);

    for pair in partitions.windows(2) {
        assert_eq!(pair[1].offset, pair[0].end(), "partitions must be contiguous");
    }

    for p in partitions {
        if total > 0 {
            assert!(p.length > 0, "empty partition {p:?} in a non-empty source");
        }
        if p.end() < total {
            assert_eq!(
                data[p.end() as usize - 1],
                b'\n',
                "boundary {} is not after a newline",
                p.end()
            );
        }
    }
}

proptest! {
    #[test]
    fn partitions_cover_source_on_line_boundaries(
        data in text(),
        workers in 1usize..64,
        lookahead in 1usize..64,
    ) {
        let partitions = partition(&data, workers, lookahead);

        assert_covering(&data, &partitions);
        prop_assert!(partitions.len() <= workers);
    }

    #[test]
    fn single_worker_gets_whole_source(data in text(), lookahead in 1usize..64) {
        let partitions = partition(&data, 1, lookahead);

        prop_assert_eq!(partitions, vec![Partition::new(0, data.len() as u64)]);
    }

    #[test]
    fn boundaries_follow_first_newline_after_nominal_offset(
        data in text(),
        workers in 1usize..16,
        lookahead in 1usize..64,
    ) {
        let total = data.len() as u64;
        let partitions = partition(&data, workers, lookahead);
        let size = total / workers as u64;

        // Every partition but the last was cut at the first newline behind
        // its nominal end, whose lookahead window lay fully inside the data.
        for p in &partitions[..partitions.len() - 1] {
            let nominal = p.offset + size;
            prop_assert!(nominal + lookahead as u64 <= total);
            prop_assert_eq!(next_boundary(&data, nominal), Some(p.end()));
        }
    }

    #[test]
    fn window_passing_the_end_truncates(
        data in text(),
        workers in 2usize..16,
        lookahead in 1usize..64,
    ) {
        let total = data.len() as u64;
        let partitions = partition(&data, workers, lookahead);
        let size = total / workers as u64;

        // Fewer partitions than workers only when the last one started too
        // close to the end for a full window, had no newline left, or was
        // itself cut at the final newline.
        if total > 0 && partitions.len() < workers {
            let last = partitions[partitions.len() - 1];
            let nominal = last.offset + size;
            let window_passes_end = nominal + lookahead as u64 > total;
            let boundary = next_boundary(&data, nominal);
            prop_assert!(window_passes_end || boundary.is_none() || boundary == Some(total));
        }
    }
}

/// Lines of equal length split into exactly the requested number of shares
/// when every window is as long as a line.
#[test]
fn uniform_lines_give_requested_partition_count() {
    let data = "0123456789\n".repeat(100).into_bytes();

    for workers in [2, 3, 4, 5, 10, 12] {
        let partitions = partition(&data, workers, 11);

        assert_covering(&data, &partitions);
        assert_eq!(partitions.len(), workers);
    }
}

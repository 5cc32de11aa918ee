//! The parallel slicing coordinator.
//!
//! [`slice_file`] is the crate's main operation. Without fingerprinting it
//! is a synchronous pass over the source on the calling thread. With
//! fingerprinting it fans the chunk index space out over a fixed-size pool
//! of worker threads, each slicing and fingerprinting its own contiguous
//! index range, and fans the partial results back in.
//!
//! Workers share nothing mutable: each receives a cheap clone of the
//! source (a refcounted view of the same buffer) plus its index range, and
//! reports exactly one tagged reply over an mpsc channel. The coordinator
//! writes every partial result at its absolute index into a preallocated
//! slot vector, so the output order is ascending by chunk index no matter
//! which worker finishes first.
//!
//! Failure is fatal to the whole invocation: on the first error reply (or
//! a worker vanishing without one) the coordinator drops the receiver and
//! returns. Remaining workers finish their range into a closed channel and
//! wind down; their results are discarded. There are no retries and no
//! timeout, so a hung worker hangs the invocation.

use std::ops::Range;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crate::chunk::ChunkDescriptor;
use crate::config::SliceConfig;
use crate::error::SliceError;
use crate::slicer;
use crate::source::SourceFile;

/// One worker's report: its range start plus either the ordered chunks for
/// that range or a failure message.
struct WorkerReply {
    start: u64,
    outcome: Result<Vec<ChunkDescriptor>, String>,
}

/// Slices a source file into chunk descriptors.
///
/// With `compute_hash` disabled (the default) this is the synchronous fast
/// path: all chunks are produced on the calling thread with placeholder
/// fingerprints. With `compute_hash` enabled, slicing and fingerprinting
/// run on a pool of worker threads sized by
/// [`SliceConfig::effective_thread_count`].
///
/// Output is always in ascending chunk-index order.
///
/// # Errors
///
/// - [`SliceError::InvalidConfig`] before any work is dispatched, if the
///   configuration fails validation
/// - [`SliceError::Worker`] if any worker fails; no descriptors are
///   returned in that case
///
/// # Example
///
/// ```
/// use fileslice::{SliceConfig, SourceFile, slice_file};
///
/// let source = SourceFile::new(vec![0u8; 3 * 1024 * 1024], "data.bin", "application/octet-stream");
/// let chunks = slice_file(&source, &SliceConfig::default().with_chunk_size_mb(1.0))?;
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].range(), 0..1024 * 1024);
/// # Ok::<(), fileslice::SliceError>(())
/// ```
pub fn slice_file(
    source: &SourceFile,
    config: &SliceConfig,
) -> Result<Vec<ChunkDescriptor>, SliceError> {
    config.validate()?;
    let chunk_size = config.chunk_size_bytes();

    if !config.compute_hash() {
        return Ok(slicer::slice(source, chunk_size));
    }

    let chunk_count = source.len().div_ceil(chunk_size);
    if chunk_count == 0 {
        return Ok(Vec::new());
    }

    let ranges = partition(chunk_count, config.effective_thread_count() as u64);
    let source = source.clone();
    dispatch(&ranges, chunk_count, move |range| {
        Ok(range
            .map(|index| slicer::create_chunk(&source, index, chunk_size))
            .collect())
    })
}

/// Partitions `[0, chunk_count)` into `thread_count` half-open ranges of
/// `ceil(chunk_count / thread_count)` indices each, the last truncated.
///
/// Trailing ranges may be empty when `chunk_count < thread_count`; the
/// dispatcher skips those. Non-empty ranges are disjoint and cover the
/// whole index space.
fn partition(chunk_count: u64, thread_count: u64) -> Vec<Range<u64>> {
    debug_assert!(thread_count > 0);
    let per_thread = chunk_count.div_ceil(thread_count);
    (0..thread_count)
        .map(|i| {
            let start = (i * per_thread).min(chunk_count);
            let end = ((i + 1) * per_thread).min(chunk_count);
            start..end
        })
        .collect()
}

/// Spawns one worker thread per non-empty range, merges replies into
/// absolute index order, and fails fast on the first worker error.
fn dispatch<F>(
    ranges: &[Range<u64>],
    chunk_count: u64,
    work: F,
) -> Result<Vec<ChunkDescriptor>, SliceError>
where
    F: Fn(Range<u64>) -> Result<Vec<ChunkDescriptor>, String> + Send + Sync + 'static,
{
    let (tx, rx) = mpsc::channel::<WorkerReply>();
    let work = Arc::new(work);

    let mut spawned = 0;
    for range in ranges.iter().filter(|r| !r.is_empty()) {
        spawned += 1;
        let tx = tx.clone();
        let work = Arc::clone(&work);
        let range = range.clone();
        thread::spawn(move || {
            let start = range.start;
            let outcome = work(range);
            // The receiver is gone if the coordinator already failed;
            // nothing left to report to.
            let _ = tx.send(WorkerReply { start, outcome });
        });
    }
    drop(tx);

    let mut slots: Vec<Option<ChunkDescriptor>> = (0..chunk_count).map(|_| None).collect();
    let mut finished = 0;
    while finished < spawned {
        let reply = rx.recv().map_err(|_| SliceError::Worker {
            message: "worker exited without reporting".to_string(),
        })?;
        match reply.outcome {
            Ok(items) => {
                for (i, item) in items.into_iter().enumerate() {
                    if let Some(slot) = slots.get_mut(reply.start as usize + i) {
                        *slot = Some(item);
                    }
                }
                finished += 1;
            }
            Err(message) => {
                tracing::error!(error = %message, "worker reported an error, aborting slice");
                return Err(SliceError::Worker { message });
            }
        }
    }

    slots
        .into_iter()
        .map(|slot| {
            slot.ok_or_else(|| SliceError::Worker {
                message: "worker reported an incomplete range".to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::time::Duration;

    fn descriptor(index: u64) -> ChunkDescriptor {
        ChunkDescriptor {
            payload: Bytes::new(),
            start: index * 4,
            end: (index + 1) * 4,
            fingerprint: format!("fp-{}", index),
            mime_type: "application/octet-stream".to_string(),
            source_name: "test.bin".to_string(),
        }
    }

    #[test]
    fn test_partition_even() {
        assert_eq!(partition(8, 4), vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn test_partition_truncates_last() {
        assert_eq!(partition(10, 4), vec![0..3, 3..6, 6..9, 9..10]);
    }

    #[test]
    fn test_partition_more_threads_than_chunks() {
        // Trailing range is empty and contributes nothing.
        assert_eq!(partition(3, 4), vec![0..1, 1..2, 2..3, 3..3]);
    }

    #[test]
    fn test_partition_covers_index_space() {
        for chunk_count in [1u64, 3, 7, 16, 100] {
            for thread_count in [1u64, 2, 4, 13] {
                let ranges = partition(chunk_count, thread_count);
                assert_eq!(ranges.len(), thread_count as usize);
                let mut next = 0;
                for r in &ranges {
                    assert_eq!(r.start, next.min(chunk_count));
                    assert!(r.end >= r.start);
                    next = r.end;
                }
                assert_eq!(next, chunk_count);
            }
        }
    }

    #[test]
    fn test_dispatch_orders_by_index_not_completion() {
        // The worker owning the low range is slowest; the merged output
        // must still be in ascending index order.
        let ranges = partition(8, 4);
        let chunks = dispatch(&ranges, 8, |range| {
            if range.start == 0 {
                thread::sleep(Duration::from_millis(100));
            }
            Ok(range.map(descriptor).collect())
        })
        .unwrap();

        assert_eq!(chunks.len(), 8);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.fingerprint, format!("fp-{}", i));
            assert_eq!(chunk.start, i as u64 * 4);
        }
    }

    #[test]
    fn test_dispatch_single_failure_rejects_all() {
        let ranges = partition(8, 4);
        let err = dispatch(&ranges, 8, |range| {
            if range.start == 4 {
                Err("boom".to_string())
            } else {
                Ok(range.map(descriptor).collect())
            }
        })
        .unwrap_err();

        match err {
            SliceError::Worker { message } => assert_eq!(message, "boom"),
            other => panic!("expected worker error, got {}", other),
        }
    }

    #[test]
    fn test_dispatch_worker_panic_rejects() {
        let ranges = partition(4, 2);
        let err = dispatch(&ranges, 4, |range| {
            if range.start == 2 {
                panic!("worker died");
            }
            Ok(range.map(descriptor).collect())
        })
        .unwrap_err();

        assert!(matches!(err, SliceError::Worker { .. }));
    }

    #[test]
    fn test_dispatch_incomplete_range_rejects() {
        let ranges = partition(4, 2);
        let err = dispatch(&ranges, 4, |range| {
            // Drops the last index of each range.
            Ok(range.clone().take(range.count() - 1).map(descriptor).collect())
        })
        .unwrap_err();

        assert!(matches!(err, SliceError::Worker { .. }));
    }

    #[test]
    fn test_slice_file_fast_path_uses_placeholder() {
        let source = SourceFile::new(vec![7u8; 10], "f.bin", "application/octet-stream");
        let config = SliceConfig::default();
        // 10 bytes in one 5 MiB chunk.
        let chunks = slice_file(&source, &config).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].fingerprint, "f.bin-0");
    }

    #[test]
    fn test_slice_file_invalid_config() {
        let source = SourceFile::new(vec![7u8; 10], "f.bin", "application/octet-stream");
        let config = SliceConfig::default().with_chunk_size_mb(0.0);
        assert!(matches!(
            slice_file(&source, &config),
            Err(SliceError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_slice_file_empty_source_hashing() {
        let source = SourceFile::new(Bytes::new(), "empty.bin", "application/octet-stream");
        let config = SliceConfig::default().with_compute_hash(true);
        assert!(slice_file(&source, &config).unwrap().is_empty());
    }
}

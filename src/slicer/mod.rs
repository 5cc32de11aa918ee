//! Fixed-size slicing of a source file into chunk descriptors.
//!
//! Two entry points, one per slicing mode:
//!
//! - [`slice`] - the synchronous fast path: every chunk at once, with a
//!   cheap placeholder fingerprint
//! - [`create_chunk`] - one chunk by index, with a real fingerprint; the
//!   unit of work run by the parallel coordinator's workers

use crate::chunk::ChunkDescriptor;
use crate::hash;
use crate::source::SourceFile;

/// Slices the whole source into `ceil(len / chunk_size)` descriptors in
/// ascending offset order. Payloads are zero-copy views of the source.
///
/// The fingerprint in this mode is the placeholder `"{name}-{offset}"`.
/// It is not content-derived and must not be treated as a content hash.
///
/// `chunk_size` must be non-zero; the config layer validates this before
/// any call reaches here.
pub(crate) fn slice(source: &SourceFile, chunk_size: u64) -> Vec<ChunkDescriptor> {
    debug_assert!(chunk_size > 0);
    let mut chunks = Vec::with_capacity(source.len().div_ceil(chunk_size) as usize);
    let mut offset = 0;
    while offset < source.len() {
        let end = offset + chunk_size;
        chunks.push(ChunkDescriptor {
            payload: source.slice(offset, end),
            start: offset,
            end,
            fingerprint: format!("{}-{}", source.name(), offset),
            mime_type: source.mime_type().to_string(),
            source_name: source.name().to_string(),
        });
        offset = end;
    }
    chunks
}

/// Creates the chunk at `index` with its fingerprint.
///
/// Chunk 0 gets a content digest over its payload bytes (falling back to
/// the fast fingerprint when digest support is absent); every later chunk
/// gets the fast fingerprint over `"{name}-{index}-{start}"` without
/// touching the payload bytes. Only the first chunk's fingerprint serves
/// as a representative identity check downstream, so only it pays for a
/// full read.
pub(crate) fn create_chunk(source: &SourceFile, index: u64, chunk_size: u64) -> ChunkDescriptor {
    let start = index * chunk_size;
    let end = start + chunk_size;
    let payload = source.slice(start, end);

    let fingerprint = if index == 0 {
        hash::content_fingerprint(source.name(), index, start, &payload)
    } else {
        hash::fast_hash(&hash::chunk_key(source.name(), index, start))
    };

    ChunkDescriptor {
        payload,
        start,
        end,
        fingerprint,
        mime_type: source.mime_type().to_string(),
        source_name: source.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_of(len: usize) -> SourceFile {
        let data: Vec<u8> = (0..len).map(|i| (i % 256) as u8).collect();
        SourceFile::new(data, "data.bin", "application/octet-stream")
    }

    #[test]
    fn test_chunk_count_is_ceil() {
        for (len, size, expected) in [(0, 4, 0), (4, 4, 1), (5, 4, 2), (12, 5, 3), (3, 4, 1)] {
            let chunks = slice(&source_of(len), size);
            assert_eq!(chunks.len(), expected, "len={} size={}", len, size);
        }
    }

    #[test]
    fn test_partition_has_no_gaps_or_overlaps() {
        let source = source_of(1000);
        let chunks = slice(&source, 64);

        let mut expected_start = 0;
        for chunk in &chunks {
            assert_eq!(chunk.start, expected_start);
            assert_eq!(chunk.end, chunk.start + 64);
            expected_start = chunk.end;
        }

        let total: usize = chunks.iter().map(|c| c.len()).sum();
        assert_eq!(total, 1000);
    }

    #[test]
    fn test_final_chunk_clamped() {
        let source = source_of(10);
        let chunks = slice(&source, 4);

        let last = chunks.last().unwrap();
        assert_eq!(last.start, 8);
        assert_eq!(last.end, 12, "nominal end may exceed the source length");
        assert_eq!(last.len(), 2, "payload is clamped to the source");
    }

    #[test]
    fn test_placeholder_fingerprint() {
        let chunks = slice(&source_of(10), 4);
        assert_eq!(chunks[0].fingerprint, "data.bin-0");
        assert_eq!(chunks[1].fingerprint, "data.bin-4");
    }

    #[test]
    fn test_payloads_are_views() {
        let source = source_of(10);
        let chunks = slice(&source, 4);
        assert_eq!(chunks[0].payload.as_ptr(), source.slice(0, 4).as_ptr());
    }

    #[test]
    fn test_create_chunk_metadata() {
        let source = source_of(10);
        let chunk = create_chunk(&source, 1, 4);
        assert_eq!(chunk.start, 4);
        assert_eq!(chunk.end, 8);
        assert_eq!(chunk.payload.as_ref(), &source.slice(4, 8)[..]);
        assert_eq!(chunk.source_name, "data.bin");
        assert_eq!(chunk.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_later_chunks_use_fast_fingerprint() {
        let source = source_of(10);
        let chunk = create_chunk(&source, 2, 4);
        let expected = crate::hash::fast_hash(&crate::hash::chunk_key("data.bin", 2, 8));
        assert_eq!(chunk.fingerprint, expected);
    }

    #[test]
    fn test_identical_content_distinct_fingerprints() {
        // Chunks 1 and 2 have identical bytes but different index/offset,
        // so the fast fingerprints differ: it is not a content hash.
        let data = [b"aaaa".as_slice(), b"bbbb", b"bbbb"].concat();
        let source = SourceFile::new(data, "dup.bin", "application/octet-stream");
        let one = create_chunk(&source, 1, 4);
        let two = create_chunk(&source, 2, 4);
        assert_eq!(one.payload, two.payload);
        assert_ne!(one.fingerprint, two.fingerprint);
    }

    #[cfg(feature = "hash-md5")]
    #[test]
    fn test_chunk_zero_digest_is_content_derived() {
        let a = create_chunk(
            &SourceFile::new(&b"same bytes"[..], "a.bin", "application/octet-stream"),
            0,
            16,
        );
        let b = create_chunk(
            &SourceFile::new(&b"same bytes"[..], "b.bin", "application/octet-stream"),
            0,
            16,
        );
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_ne!(a.fingerprint, "a.bin-0");
    }
}

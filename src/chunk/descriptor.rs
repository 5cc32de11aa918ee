//! The ChunkDescriptor type - one byte range of a sliced source.

use bytes::Bytes;
use std::fmt;

/// A contiguous byte range of a source file.
///
/// Produced fresh per slicing invocation and owned entirely by the caller
/// afterwards. The payload is a zero-copy view into the source buffer.
///
/// `end` is always `start + chunk_size` and may exceed the source length
/// on the final chunk; the payload itself is clamped to the source.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use fileslice::ChunkDescriptor;
///
/// let chunk = ChunkDescriptor {
///     payload: Bytes::from_static(b"hello"),
///     start: 0,
///     end: 5,
///     fingerprint: "a0f1490".to_string(),
///     mime_type: "text/plain".to_string(),
///     source_name: "hello.txt".to_string(),
/// };
///
/// assert_eq!(chunk.len(), 5);
/// assert_eq!(chunk.range(), 0..5);
/// ```
#[derive(Debug, Clone)]
pub struct ChunkDescriptor {
    /// The chunk payload, a zero-copy view of the source (clamped).
    pub payload: Bytes,

    /// Start offset in the source, inclusive.
    pub start: u64,

    /// End offset, exclusive. May exceed the source length on the final
    /// chunk.
    pub end: u64,

    /// The chunk fingerprint. Content-derived only for chunk 0 of the
    /// hashing path; otherwise a cheap index/offset-derived string.
    pub fingerprint: String,

    /// MIME type of the source file.
    pub mime_type: String,

    /// Name of the source file.
    pub source_name: String,
}

impl ChunkDescriptor {
    /// Returns the payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Returns the nominal offset range `[start, end)`.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.start..self.end
    }

    /// Consumes the descriptor and returns the payload.
    pub fn into_payload(self) -> Bytes {
        self.payload
    }
}

impl fmt::Display for ChunkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChunkDescriptor({} bytes @ {}..{}, fingerprint={})",
            self.len(),
            self.start,
            self.end,
            self.fingerprint
        )
    }
}

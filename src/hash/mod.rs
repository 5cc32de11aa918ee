//! Chunk fingerprint implementations.
//!
//! Two tiers, matching the cost asymmetry of the slicing subsystem:
//!
//! - a fast non-cryptographic rolling hash over a key string, used for
//!   every chunk past the first (and as the fallback for chunk 0)
//! - an MD5 content digest for chunk 0, available behind the `hash-md5`
//!   feature

mod fast;

#[cfg(any(feature = "hash-md5", feature = "crypt"))]
pub(crate) mod md5;

pub(crate) use fast::{chunk_key, fast_hash};

/// Content fingerprint for chunk 0.
///
/// Digests the payload bytes when MD5 support is compiled in.
#[cfg(feature = "hash-md5")]
pub(crate) fn content_fingerprint(
    _name: &str,
    _index: u64,
    _start: u64,
    payload: &[u8],
) -> String {
    md5::md5_hex(payload)
}

/// Content fingerprint for chunk 0.
///
/// MD5 support is not compiled in, so this recovers by falling back to the
/// fast fingerprint over the chunk key. Surfaced as a warning only; the
/// overall operation still succeeds.
#[cfg(not(feature = "hash-md5"))]
pub(crate) fn content_fingerprint(
    name: &str,
    index: u64,
    start: u64,
    _payload: &[u8],
) -> String {
    tracing::warn!(
        source = name,
        "md5 digest unavailable, falling back to fast fingerprint"
    );
    fast_hash(&chunk_key(name, index, start))
}

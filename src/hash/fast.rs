//! Fast non-cryptographic fingerprints.

/// Builds the key string hashed for chunks past the first.
pub(crate) fn chunk_key(name: &str, index: u64, start: u64) -> String {
    format!("{}-{}-{}", name, index, start)
}

/// Additive polynomial rolling hash folded into a wrapping `i32`, rendered
/// as the lowercase hex of its absolute value.
///
/// Consumes UTF-16 code units of the input. This is a dedup hint, not a
/// content checksum: it is deterministic in its input string and nothing
/// else.
pub(crate) fn fast_hash(input: &str) -> String {
    let mut h: i32 = 0;
    for unit in input.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(unit as i32);
    }
    format!("{:x}", h.unsigned_abs())
}

//! Chunk types.
//!
//! - [`ChunkDescriptor`] - one contiguous byte range of a source file with
//!   its fingerprint and source metadata

mod descriptor;

pub use descriptor::ChunkDescriptor;

//! fileslice
//!
//! Fixed-size file chunking with optional parallel per-chunk
//! fingerprinting, plus a handful of small file utilities.
//!
//! The core operation is [`slice_file`]: it partitions an immutable
//! [`SourceFile`] into contiguous [`ChunkDescriptor`]s of a configured
//! size. Payloads are zero-copy views of the source buffer. When
//! fingerprinting is requested, the chunk index space is fanned out over a
//! pool of worker threads; chunk 0 gets an MD5 content digest (with a fast
//! fallback when digest support is compiled out) and every later chunk
//! gets a cheap index/offset-derived fingerprint.
//!
//! The crate intentionally:
//! - does NOT retry or time out workers (a single failure fails the call)
//! - does NOT persist chunks
//! - does NOT do content-defined chunking; boundaries are fixed-size
//!
//! # Slicing
//!
//! ```no_run
//! use fileslice::{SliceConfig, SliceError, SourceFile, slice_file};
//!
//! fn main() -> Result<(), SliceError> {
//!     let source = SourceFile::open("data.bin")?;
//!     let config = SliceConfig::default().with_compute_hash(true);
//!
//!     for chunk in slice_file(&source, &config)? {
//!         println!("chunk {} bytes, fingerprint {}", chunk.len(), chunk.fingerprint);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Utilities
//!
//! The [`numstr`], [`daterange`], [`crypt`], [`download`], and
//! [`debounce`] modules carry the bundled helpers: decimal-string
//! addition, calendar date ranges, AES-256-GCM sealing of serializable
//! values, blob saving, and trailing-edge debouncing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod error;
mod parallel;
mod slicer;
mod source;

mod hash; // internal fingerprint impls

pub mod daterange;
pub mod debounce;
pub mod download;
pub mod numstr;

#[cfg(feature = "crypt")]
pub mod crypt;

//
// Public surface (intentionally tiny)
//

pub use chunk::ChunkDescriptor;
pub use config::SliceConfig;
pub use debounce::Debouncer;
pub use error::{DateRangeError, NumericStringError, SliceError};
pub use parallel::slice_file;
pub use source::SourceFile;

#[cfg(feature = "crypt")]
pub use error::CryptError;

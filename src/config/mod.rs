//! Configuration for slicing behavior.
//!
//! [`SliceConfig`] controls the chunk size, whether fingerprints are
//! computed, and how many worker threads the hashing path may use.
//!
//! # Example
//!
//! ```
//! use fileslice::SliceConfig;
//!
//! // 5 MiB chunks, no hashing (the defaults)
//! let config = SliceConfig::default();
//!
//! // 2 MiB chunks with fingerprinting on a fixed 2-thread pool
//! let config = SliceConfig::default()
//!     .with_chunk_size_mb(2.0)
//!     .with_compute_hash(true)
//!     .with_thread_count(2);
//! # config.validate().unwrap();
//! ```

use crate::error::SliceError;

/// Default chunk size in MiB.
pub const DEFAULT_CHUNK_SIZE_MB: f64 = 5.0;

/// Thread count used when the platform reports no parallelism hint.
pub const FALLBACK_THREAD_COUNT: usize = 4;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Configuration for slicing a source file.
///
/// The chunk size is given in MiB and rounded to a whole number of MiB
/// before use; after rounding it must be at least 1. The thread count only
/// affects the hashing path and defaults to the platform parallelism hint
/// (or 4 when unavailable).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceConfig {
    /// Chunk size in MiB (rounded before use).
    chunk_size_mb: f64,

    /// Whether to compute per-chunk fingerprints.
    compute_hash: bool,

    /// Worker thread count override for the hashing path.
    thread_count: Option<usize>,
}

impl SliceConfig {
    /// Creates a configuration with the given chunk size and hash flag.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::InvalidConfig`] if the chunk size rounds to
    /// zero or is not a finite number.
    ///
    /// # Example
    ///
    /// ```
    /// use fileslice::SliceConfig;
    ///
    /// let config = SliceConfig::new(5.0, true)?;
    /// assert_eq!(config.chunk_size_bytes(), 5 * 1024 * 1024);
    /// # Ok::<(), fileslice::SliceError>(())
    /// ```
    pub fn new(chunk_size_mb: f64, compute_hash: bool) -> Result<Self, SliceError> {
        let config = Self {
            chunk_size_mb,
            compute_hash,
            thread_count: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the chunk size in MiB.
    ///
    /// Note: this does not validate; use [`SliceConfig::validate`].
    pub fn with_chunk_size_mb(mut self, chunk_size_mb: f64) -> Self {
        self.chunk_size_mb = chunk_size_mb;
        self
    }

    /// Sets whether per-chunk fingerprints are computed.
    pub fn with_compute_hash(mut self, compute_hash: bool) -> Self {
        self.compute_hash = compute_hash;
        self
    }

    /// Pins the worker thread count instead of using the platform hint.
    ///
    /// Note: this does not validate; use [`SliceConfig::validate`].
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = Some(thread_count);
        self
    }

    /// Returns the configured chunk size in MiB, before rounding.
    pub fn chunk_size_mb(&self) -> f64 {
        self.chunk_size_mb
    }

    /// Returns the chunk size in bytes: `round(chunk_size_mb) * 1024 * 1024`.
    pub fn chunk_size_bytes(&self) -> u64 {
        self.chunk_size_mb.round() as u64 * BYTES_PER_MB
    }

    /// Returns whether per-chunk fingerprints are computed.
    pub fn compute_hash(&self) -> bool {
        self.compute_hash
    }

    /// Returns the worker thread count the hashing path will use: the
    /// configured override, else the platform parallelism hint, else 4.
    pub fn effective_thread_count(&self) -> usize {
        self.thread_count.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(FALLBACK_THREAD_COUNT)
        })
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use fileslice::SliceConfig;
    ///
    /// let config = SliceConfig::default().with_chunk_size_mb(0.0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SliceError> {
        if !self.chunk_size_mb.is_finite() {
            return Err(SliceError::InvalidConfig {
                message: "chunk size must be a finite number of MiB",
            });
        }
        if self.chunk_size_mb.round() < 1.0 {
            return Err(SliceError::InvalidConfig {
                message: "chunk size must round to at least 1 MiB",
            });
        }
        if self.thread_count == Some(0) {
            return Err(SliceError::InvalidConfig {
                message: "thread count must be non-zero",
            });
        }
        Ok(())
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            chunk_size_mb: DEFAULT_CHUNK_SIZE_MB,
            compute_hash: false,
            thread_count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SliceConfig::default();
        assert_eq!(config.chunk_size_mb(), DEFAULT_CHUNK_SIZE_MB);
        assert!(!config.compute_hash());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chunk_size_rounding() {
        let config = SliceConfig::default().with_chunk_size_mb(2.6);
        assert_eq!(config.chunk_size_bytes(), 3 * 1024 * 1024);

        let config = SliceConfig::default().with_chunk_size_mb(0.5);
        assert_eq!(config.chunk_size_bytes(), 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_chunk_size() {
        assert!(SliceConfig::new(0.0, false).is_err());
        assert!(SliceConfig::new(0.4, false).is_err());
        assert!(SliceConfig::new(-5.0, false).is_err());
        assert!(SliceConfig::new(f64::NAN, false).is_err());
        assert!(SliceConfig::new(f64::INFINITY, false).is_err());
    }

    #[test]
    fn test_invalid_thread_count() {
        let config = SliceConfig::default().with_thread_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_thread_count_override() {
        let config = SliceConfig::default().with_thread_count(2);
        assert_eq!(config.effective_thread_count(), 2);
    }

    #[test]
    fn test_thread_count_default_is_positive() {
        assert!(SliceConfig::default().effective_thread_count() >= 1);
    }
}

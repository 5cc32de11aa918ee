//! The SourceFile type - an immutable, named byte source.

use std::path::Path;

use bytes::Bytes;

use crate::download::FileType;
use crate::error::SliceError;

const DEFAULT_MIME: &str = "application/octet-stream";

/// An immutable byte source with a name and MIME type.
///
/// Backed by [`Bytes`], so cloning is a reference-count bump; the same
/// underlying buffer is shared by every clone and every chunk payload
/// sliced from it. The source is read-only to the slicing subsystem.
///
/// # Example
///
/// ```
/// use fileslice::SourceFile;
///
/// let source = SourceFile::new(&b"hello world"[..], "hello.txt", "text/plain");
/// assert_eq!(source.len(), 11);
/// assert_eq!(source.name(), "hello.txt");
/// ```
#[derive(Debug, Clone)]
pub struct SourceFile {
    data: Bytes,
    name: String,
    mime_type: String,
}

impl SourceFile {
    /// Creates a source from in-memory bytes.
    pub fn new(data: impl Into<Bytes>, name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Loads a source from the filesystem.
    ///
    /// The name is the file name component of the path; the MIME type is
    /// guessed from the extension, defaulting to `application/octet-stream`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SliceError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = path
            .extension()
            .and_then(|ext| FileType::from_extension(&ext.to_string_lossy()))
            .map(|t| t.mime_type())
            .unwrap_or(DEFAULT_MIME);
        Ok(Self::new(data, name, mime_type))
    }

    /// Returns the total length in bytes.
    pub fn len(&self) -> u64 {
        self.data.len() as u64
    }

    /// Returns true if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the source name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the MIME type.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns a zero-copy view of `[start, end)`, clamped to the source
    /// length. `end` may exceed the length; the view is truncated, never
    /// an error.
    pub fn slice(&self, start: u64, end: u64) -> Bytes {
        let len = self.data.len() as u64;
        let start = start.min(len) as usize;
        let end = end.min(len) as usize;
        self.data.slice(start..end)
    }
}

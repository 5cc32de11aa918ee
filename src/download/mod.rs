//! Saving binary blobs to disk with a known document type.

use std::io;
use std::path::{Path, PathBuf};

/// Document types with well-known MIME types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum FileType {
    Pdf,
    Doc,
    Docx,
    Xls,
    Xlsx,
    Ppt,
    Pptx,
    Zip,
}

impl FileType {
    /// Returns the MIME type for this document type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            FileType::Pdf => "application/pdf",
            FileType::Doc => "application/msword",
            FileType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            FileType::Xls => "application/vnd.ms-excel",
            FileType::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            FileType::Ppt => "application/vnd.ms-powerpoint",
            FileType::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            FileType::Zip => "application/zip",
        }
    }

    /// Returns the canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Doc => "doc",
            FileType::Docx => "docx",
            FileType::Xls => "xls",
            FileType::Xlsx => "xlsx",
            FileType::Ppt => "ppt",
            FileType::Pptx => "pptx",
            FileType::Zip => "zip",
        }
    }

    /// Looks up a document type by extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileType::Pdf),
            "doc" => Some(FileType::Doc),
            "docx" => Some(FileType::Docx),
            "xls" => Some(FileType::Xls),
            "xlsx" => Some(FileType::Xlsx),
            "ppt" => Some(FileType::Ppt),
            "pptx" => Some(FileType::Pptx),
            "zip" => Some(FileType::Zip),
            _ => None,
        }
    }
}

/// Writes `data` into `dir` and returns the written path.
///
/// The filename defaults to `download`; the extension for `file_type` is
/// appended unless the given name already carries it.
///
/// # Example
///
/// ```no_run
/// use fileslice::download::{FileType, save_blob};
///
/// let path = save_blob(b"%PDF-1.7 ...", FileType::Pdf, "/tmp", Some("report"))?;
/// assert!(path.ends_with("report.pdf"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn save_blob(
    data: &[u8],
    file_type: FileType,
    dir: impl AsRef<Path>,
    filename: Option<&str>,
) -> io::Result<PathBuf> {
    let name = filename.unwrap_or("download");
    let ext = file_type.extension();
    let full_name = if name.ends_with(&format!(".{}", ext)) {
        name.to_string()
    } else {
        format!("{}.{}", name, ext)
    };

    let path = dir.as_ref().join(full_name);
    std::fs::write(&path, data)?;
    Ok(path)
}

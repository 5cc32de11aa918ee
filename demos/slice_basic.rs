//! Fast-path slicing of an in-memory buffer.
//!
//! Run with: cargo run --example slice_basic

use fileslice::{SliceConfig, SliceError, SourceFile, slice_file};

fn main() -> Result<(), SliceError> {
    let data: Vec<u8> = (0..12 * 1024 * 1024).map(|i| (i % 251) as u8).collect();
    let source = SourceFile::new(data, "demo.bin", "application/octet-stream");

    let chunks = slice_file(&source, &SliceConfig::default())?;

    println!("{} bytes -> {} chunks", source.len(), chunks.len());
    for chunk in &chunks {
        println!("  {}", chunk);
    }
    Ok(())
}

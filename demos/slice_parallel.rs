//! Parallel slicing with per-chunk fingerprints.
//!
//! Run with: cargo run --example slice_parallel

use fileslice::{SliceConfig, SliceError, SourceFile, slice_file};

fn main() -> Result<(), SliceError> {
    let data: Vec<u8> = (0..32 * 1024 * 1024).map(|i| (i % 251) as u8).collect();
    let source = SourceFile::new(data, "demo.bin", "application/octet-stream");

    let config = SliceConfig::default()
        .with_chunk_size_mb(2.0)
        .with_compute_hash(true);

    let chunks = slice_file(&source, &config)?;

    println!(
        "{} bytes -> {} chunks on {} threads",
        source.len(),
        chunks.len(),
        config.effective_thread_count()
    );
    println!("chunk 0 digest: {}", chunks[0].fingerprint);
    for chunk in chunks.iter().take(4).skip(1) {
        println!("chunk @ {}: {}", chunk.start, chunk.fingerprint);
    }
    Ok(())
}

//! Single-process micro-benchmarks for the table-driven CRC-32 engine.
//! It checksums a random payload one-shot, then chunked, then through the
//! whole load-and-checksum pipeline against a real temp file.

use file_crc32::{Crc32, compute_crc32, load_file};
use rand::RngCore;
use std::fs;
use std::time::Instant;
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// Tunables
// ---------------------------------------------------------------------------

const PAYLOAD_SIZE: usize = 64 * 1024 * 1024; // bytes
const CHUNK_SIZE: usize = 64 * 1024; // bytes / update

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let mut payload = vec![0u8; PAYLOAD_SIZE];
    rand::rng().fill_bytes(&mut payload);

    println!("Running checksum benchmark…");
    let one_shot = benchmark_one_shot(&payload);
    let chunked = benchmark_chunked(&payload);
    assert_eq!(one_shot, chunked, "chunked result diverged");
    benchmark_file_pipeline(&payload, one_shot);
    println!("✅ Benchmarks completed.");
}

// ---------------------------------------------------------------------------
// 1 ─ One-shot checksum over the whole payload
// ---------------------------------------------------------------------------

fn benchmark_one_shot(payload: &[u8]) -> u32 {
    let start_time = Instant::now();
    let crc32 = compute_crc32(payload);
    report("one-shot", payload.len(), start_time.elapsed().as_secs_f64());
    crc32
}

// ---------------------------------------------------------------------------
// 2 ─ Chunked updates through the incremental accumulator
// ---------------------------------------------------------------------------

fn benchmark_chunked(payload: &[u8]) -> u32 {
    let start_time = Instant::now();

    let mut crc = Crc32::new();
    for chunk in payload.chunks(CHUNK_SIZE) {
        crc.update(chunk);
    }
    let crc32 = crc.finalize();

    report("chunked", payload.len(), start_time.elapsed().as_secs_f64());
    crc32
}

// ---------------------------------------------------------------------------
// 3 ─ Full pipeline: load from disk, then checksum
// ---------------------------------------------------------------------------

fn benchmark_file_pipeline(payload: &[u8], expected: u32) {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let path = temp_file.path().to_path_buf();
    fs::write(&path, payload).expect("Failed to write benchmark payload");

    let start_time = Instant::now();
    let buffer = load_file(&path).expect("Failed to load benchmark payload");
    let crc32 = compute_crc32(&buffer);
    report("load+checksum", payload.len(), start_time.elapsed().as_secs_f64());

    assert_eq!(crc32, expected, "pipeline result diverged");
}

fn report(label: &str, bytes: usize, seconds: f64) {
    let mib_per_sec = (bytes as f64 / (1024.0 * 1024.0)) / seconds;
    println!("  {label:<14} {seconds:.3}s  ({mib_per_sec:.1} MiB/s)");
}

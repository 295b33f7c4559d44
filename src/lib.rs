pub mod checksum;
pub use checksum::{Crc32, compute_crc32};

pub mod file_loader;
pub use file_loader::{LoadError, load_file};

pub mod cli;

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure modes of [`load_file`](crate::file_loader::load_file), one per
/// step of the load sequence. All are terminal; nothing is retried.
#[derive(Debug)]
pub enum LoadError {
    /// The path could not be opened for reading.
    Open { path: PathBuf, source: io::Error },

    /// Seeking to the end to measure the file failed (e.g. a special file
    /// that does not support seeking).
    Seek { path: PathBuf, source: io::Error },

    /// The file measured zero bytes, or rewinding to the start failed.
    /// A zero-byte file is treated as a usage error, never as "checksum
    /// of empty input".
    EmptyOrUnreadable { path: PathBuf },

    /// The allocator could not provide a buffer of the measured size.
    Allocation { bytes: u64 },

    /// Fewer bytes than measured were read; the file was truncated or
    /// modified between measurement and read.
    ShortRead { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { path, .. } => {
                write!(f, "Could not open file: {}", path.display())
            }
            LoadError::Seek { path, .. } => {
                write!(f, "Failed to seek file: {}", path.display())
            }
            LoadError::EmptyOrUnreadable { path } => {
                write!(
                    f,
                    "Cannot checksum file \"{}\" (empty or unreadable).",
                    path.display()
                )
            }
            LoadError::Allocation { bytes } => {
                write!(f, "Unable to allocate {bytes} bytes of memory.")
            }
            LoadError::ShortRead { path } => {
                write!(f, "Failed to read file: {}", path.display())
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Open { source, .. } | LoadError::Seek { source, .. } => Some(source),
            _ => None,
        }
    }
}

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::file_loader::LoadError;

/// Reads the entire file at `path` into one contiguous buffer.
///
/// The file is measured by seeking to its end, rewound, and then read in
/// full; on success the returned buffer's length equals the measured size
/// exactly. A short read is a hard failure, never a shorter buffer.
/// Zero-byte files are rejected (see [`LoadError::EmptyOrUnreadable`]).
///
/// The handle closes when it drops, on every exit path.
pub fn load_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let size = file
        .seek(SeekFrom::End(0))
        .map_err(|source| LoadError::Seek {
            path: path.to_path_buf(),
            source,
        })?;

    if size == 0 || file.seek(SeekFrom::Start(0)).is_err() {
        return Err(LoadError::EmptyOrUnreadable {
            path: path.to_path_buf(),
        });
    }

    // A size above `usize::MAX` can never be allocated on this target.
    let len = usize::try_from(size).map_err(|_| LoadError::Allocation { bytes: size })?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| LoadError::Allocation { bytes: size })?;
    buffer.resize(len, 0);

    file.read_exact(&mut buffer)
        .map_err(|_| LoadError::ShortRead {
            path: path.to_path_buf(),
        })?;

    debug!("Loaded {} bytes from {}", len, path.display());

    Ok(buffer)
}

/// Positioned reads from an archive file

use crate::error::{MmbError, Result};
use log::debug;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Read exactly `len` bytes starting at `offset`
///
/// The file is opened and closed for each call so no handle outlives the
/// access.
pub fn read_at<P: AsRef<Path>>(path: P, offset: u64, len: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    debug!("read {} bytes at {:#x} from {}", len, offset, path.display());

    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;

    let mut buffer = vec![0u8; len];
    file.read_exact(&mut buffer)?;
    Ok(buffer)
}

/// Get the size of a regular file, failing with `NotFound` if the path
/// is missing or is not a regular file
pub fn regular_file_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(meta.len()),
        Ok(_) => Err(MmbError::not_found(format!(
            "{} is not a regular file",
            path.display()
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(MmbError::not_found(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_at_offset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();

        let data = read_at(file.path(), 3, 4).unwrap();
        assert_eq!(data, b"3456");
    }

    #[test]
    fn test_read_past_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123").unwrap();

        let result = read_at(file.path(), 2, 4);
        assert!(matches!(result, Err(MmbError::Io(_))));
    }

    #[test]
    fn test_regular_file_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 42]).unwrap();

        assert_eq!(regular_file_size(file.path()).unwrap(), 42);
    }

    #[test]
    fn test_regular_file_size_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = regular_file_size(dir.path().join("missing.mmb"));
        assert!(matches!(result, Err(MmbError::NotFound(_))));
    }

    #[test]
    fn test_regular_file_size_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = regular_file_size(dir.path());
        assert!(matches!(result, Err(MmbError::NotFound(_))));
    }
}

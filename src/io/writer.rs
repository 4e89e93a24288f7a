/// Positioned writes to an archive file

use crate::error::Result;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

/// Overwrite `data` in place starting at `offset`
///
/// The file must already exist; it is never created, truncated or
/// extended past its current contents by a well-formed caller.
pub fn write_at<P: AsRef<Path>>(path: P, offset: u64, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    debug!("write {} bytes at {:#x} to {}", data.len(), offset, path.display());

    let mut file = OpenOptions::new().write(true).open(path)?;
    file.seek(SeekFrom::Start(offset))?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

/// Write `data` to a new file, replacing any existing one
pub fn write_file<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

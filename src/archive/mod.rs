/// MMB archive container

/// Catalogue listing types
pub mod catalogue;
/// Image slot accessors
pub mod slot;

pub use catalogue::CatalogueEntry;
pub use slot::ImageSlot;

use crate::error::{MmbError, Result};
use crate::format::{ARCHIVE_SIZE, IMAGE_COUNT, MAX_INDEX};
use crate::io::regular_file_size;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An MMB archive file holding 511 SSD image slots
///
/// Slots are created on first access and cached for the lifetime of the
/// archive, so field values read through one slot are not re-read.
#[derive(Debug)]
pub struct Archive {
    path: PathBuf,
    slots: HashMap<usize, ImageSlot>,
}

impl Archive {
    /// Open an existing archive, checking that it has the exact MMB size
    ///
    /// Nothing is written to the file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mmbmanager::{Archive, ImageStatus};
    ///
    /// let mut archive = Archive::open("BEEB.MMB")?;
    /// let slot = archive.get(0)?;
    /// if slot.load_status()? == ImageStatus::NotInitialised {
    ///     slot.load_from_file("elite.ssd", None, false)?;
    /// }
    /// # Ok::<(), mmbmanager::MmbError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let size = regular_file_size(path)?;
        if size != ARCHIVE_SIZE {
            return Err(MmbError::InvalidArchive {
                expected: ARCHIVE_SIZE,
                actual: size,
            });
        }

        debug!("opened archive {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            slots: HashMap::new(),
        })
    }

    /// Get the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the number of image slots
    pub fn len(&self) -> usize {
        IMAGE_COUNT
    }

    /// An archive is never empty; it always has 511 slots
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the image slot at `index` (0 to 510)
    pub fn get(&mut self, index: usize) -> Result<&mut ImageSlot> {
        if index > MAX_INDEX {
            return Err(MmbError::IndexOutOfRange {
                index,
                max: MAX_INDEX,
            });
        }

        let path = &self.path;
        Ok(self
            .slots
            .entry(index)
            .or_insert_with(|| ImageSlot::new(index, path.clone())))
    }

    /// List every slot in index order
    pub fn catalogue(&mut self) -> Result<Vec<CatalogueEntry>> {
        (0..IMAGE_COUNT)
            .map(|index| self.get(index)?.summary())
            .collect()
    }
}

/// Image slot accessors

use crate::archive::catalogue::CatalogueEntry;
use crate::error::{MmbError, Result};
use crate::format::{
    data_offset, header_offset, ImageStatus, IMAGE_DATA_SIZE, NAME_LENGTH, STATUS_OFFSET,
};
use crate::io::{read_at, regular_file_size, write_at, write_file};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// One fixed-size image record (header + data) inside an archive
///
/// Fields are read from the archive the first time they are asked for and
/// cached afterwards. Every setter writes through to the archive before
/// the cache is updated, so a failed write leaves the cache untouched.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    index: usize,
    archive_path: PathBuf,
    name: Option<String>,
    status: Option<ImageStatus>,
    data: Option<Vec<u8>>,
}

impl ImageSlot {
    /// Bind a slot to an archive path. The index must already be checked.
    pub(crate) fn new(index: usize, archive_path: PathBuf) -> Self {
        Self {
            index,
            archive_path,
            name: None,
            status: None,
            data: None,
        }
    }

    /// Get the slot index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of this slot's header
    pub fn header_offset(&self) -> u64 {
        header_offset(self.index)
    }

    /// Byte offset of this slot's data block
    pub fn data_offset(&self) -> u64 {
        data_offset(self.index)
    }

    /// Read the image name, with trailing NUL padding removed
    pub fn load_name(&mut self) -> Result<&str> {
        if self.name.is_none() {
            let raw = read_at(&self.archive_path, self.header_offset(), NAME_LENGTH)?;
            if !raw.is_ascii() {
                return Err(MmbError::Decode { index: self.index });
            }
            let end = raw.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
            let name = String::from_utf8_lossy(&raw[..end]).into_owned();
            self.name = Some(name);
        }
        Ok(self.name.as_deref().unwrap_or_default())
    }

    /// Write the image name, truncated to 15 characters
    pub fn set_name(&mut self, value: &str) -> Result<()> {
        let (buffer, name) = encode_name(value)?;
        write_at(&self.archive_path, self.header_offset(), &buffer)?;
        self.name = Some(name);
        Ok(())
    }

    /// Read the image status
    pub fn load_status(&mut self) -> Result<ImageStatus> {
        if let Some(status) = self.status {
            return Ok(status);
        }

        let raw = read_at(&self.archive_path, self.header_offset() + STATUS_OFFSET, 1)?;
        let status = ImageStatus::from(raw[0]);
        if status == ImageStatus::Unknown {
            warn!(
                "image {} has unrecognised status byte {:#04x}",
                self.index, raw[0]
            );
        }
        self.status = Some(status);
        Ok(status)
    }

    /// Write the image status. `Unknown` cannot be written.
    pub fn set_status(&mut self, value: ImageStatus) -> Result<()> {
        let byte = value
            .to_byte()
            .ok_or_else(|| MmbError::invalid_argument("Status must not be Unknown when setting"))?;
        write_at(
            &self.archive_path,
            self.header_offset() + STATUS_OFFSET,
            &[byte],
        )?;
        self.status = Some(value);
        Ok(())
    }

    /// Mark the image as locked
    pub fn lock(&mut self) -> Result<()> {
        self.set_status(ImageStatus::Locked)
    }

    /// Mark the image as unlocked
    pub fn unlock(&mut self) -> Result<()> {
        self.set_status(ImageStatus::Unlocked)
    }

    /// Mark the slot as erased. The data block is left as it is.
    pub fn erase(&mut self) -> Result<()> {
        self.set_status(ImageStatus::NotInitialised)
    }

    /// Read the raw image payload
    pub fn load_data(&mut self) -> Result<&[u8]> {
        if self.data.is_none() {
            let data = read_at(&self.archive_path, self.data_offset(), IMAGE_DATA_SIZE)?;
            self.data = Some(data);
        }
        Ok(self.data.as_deref().unwrap_or_default())
    }

    /// Write the raw image payload, which must be exactly 204800 bytes
    pub fn set_data(&mut self, value: Vec<u8>) -> Result<()> {
        if value.len() != IMAGE_DATA_SIZE {
            return Err(MmbError::invalid_argument(format!(
                "Data must be {} bytes in length, got {}",
                IMAGE_DATA_SIZE,
                value.len()
            )));
        }
        write_at(&self.archive_path, self.data_offset(), &value)?;
        self.data = Some(value);
        Ok(())
    }

    /// Save the image payload to an external file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, destination: P) -> Result<()> {
        let destination = destination.as_ref();
        let index = self.index;
        let data = self.load_data()?;
        write_file(destination, data)?;
        info!("saved image {} to {}", index, destination.display());
        Ok(())
    }

    /// Load an external 204800-byte image file into this slot
    ///
    /// The image name defaults to the file's base name. Unless `force` is
    /// set, only an erased slot may be loaded into. On success the data,
    /// name and status (`Unlocked`) are written in that order.
    pub fn load_from_file<P: AsRef<Path>>(
        &mut self,
        source: P,
        image_name: Option<&str>,
        force: bool,
    ) -> Result<()> {
        let source = source.as_ref();

        let size = regular_file_size(source)?;
        if size != IMAGE_DATA_SIZE as u64 {
            return Err(MmbError::invalid_argument(format!(
                "SSD file {} is {} bytes, expected {}",
                source.display(),
                size,
                IMAGE_DATA_SIZE
            )));
        }

        let image_name = match image_name {
            Some(name) => name.to_string(),
            None => source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    MmbError::invalid_argument(format!(
                        "Cannot derive an image name from {}",
                        source.display()
                    ))
                })?,
        };
        // Validate before anything is written
        encode_name(&image_name)?;

        let status = self.load_status()?;
        if status != ImageStatus::NotInitialised {
            if !force {
                return Err(MmbError::OverwriteRejected { index: self.index });
            }
            warn!("overwriting {} image at index {}", status, self.index);
        }

        let data = read_at(source, 0, IMAGE_DATA_SIZE)?;
        self.set_data(data)?;
        self.set_name(&image_name)?;
        self.set_status(ImageStatus::Unlocked)?;

        info!(
            "loaded {} into image {} as {:?}",
            source.display(),
            self.index,
            self.name.as_deref().unwrap_or_default()
        );
        Ok(())
    }

    /// Read the index, name and status as a catalogue entry
    ///
    /// A name that is not ASCII is listed as empty rather than failing, in
    /// the same way an unrecognised status reads as `Unknown`.
    pub fn summary(&mut self) -> Result<CatalogueEntry> {
        let name = match self.load_name() {
            Ok(name) => name.to_string(),
            Err(MmbError::Decode { index }) => {
                warn!("image {} has a name that is not ASCII", index);
                String::new()
            }
            Err(e) => return Err(e),
        };
        let status = self.load_status()?;
        Ok(CatalogueEntry {
            index: self.index,
            name,
            status,
        })
    }
}

/// Build the 15-byte on-disk name field, returning it with the truncated name
///
/// Only the first 15 characters are kept, so anything past them is never
/// checked.
fn encode_name(value: &str) -> Result<([u8; NAME_LENGTH], String)> {
    let truncated: String = value.chars().take(NAME_LENGTH).collect();
    if truncated.is_empty() {
        return Err(MmbError::invalid_argument("Name must be provided"));
    }
    if !truncated.is_ascii() {
        return Err(MmbError::invalid_argument(format!(
            "Name {:?} must be ASCII",
            truncated
        )));
    }
    if truncated.contains('\0') {
        return Err(MmbError::invalid_argument("Name must not contain NUL"));
    }

    let mut buffer = [0u8; NAME_LENGTH];
    buffer[..truncated.len()].copy_from_slice(truncated.as_bytes());
    Ok((buffer, truncated))
}

/// MMB format layout and status encoding

/// Layout constants and offset arithmetic
pub mod constants;

pub use constants::*;

use std::fmt;

/// Status of an image within the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageStatus {
    /// Status byte holds an unrecognised value; never written
    Unknown,
    /// Slot is erased and free to be loaded
    NotInitialised,
    /// Image is present and writable
    Unlocked,
    /// Image is present and write-protected
    Locked,
}

impl ImageStatus {
    /// Statuses that may be written to an archive
    pub const WRITABLE: [ImageStatus; 3] = [
        ImageStatus::NotInitialised,
        ImageStatus::Unlocked,
        ImageStatus::Locked,
    ];

    /// Get the on-disk byte for this status, or `None` for `Unknown`
    pub fn to_byte(self) -> Option<u8> {
        match self {
            ImageStatus::NotInitialised => Some(STATUS_NOT_INITIALISED),
            ImageStatus::Locked => Some(STATUS_LOCKED),
            ImageStatus::Unlocked => Some(STATUS_UNLOCKED),
            ImageStatus::Unknown => None,
        }
    }

    /// Get a human-readable name for this status
    pub fn name(&self) -> &'static str {
        match self {
            ImageStatus::Unknown => "Unknown",
            ImageStatus::NotInitialised => "NotInitialised",
            ImageStatus::Unlocked => "Unlocked",
            ImageStatus::Locked => "Locked",
        }
    }

    /// Check whether the slot holds an image
    pub fn is_occupied(&self) -> bool {
        matches!(self, ImageStatus::Unlocked | ImageStatus::Locked)
    }
}

impl From<u8> for ImageStatus {
    fn from(value: u8) -> Self {
        match value {
            STATUS_NOT_INITIALISED => ImageStatus::NotInitialised,
            STATUS_LOCKED => ImageStatus::Locked,
            STATUS_UNLOCKED => ImageStatus::Unlocked,
            _ => ImageStatus::Unknown,
        }
    }
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

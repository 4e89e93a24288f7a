use thiserror::Error;

/// Result type alias for MMB operations
pub type Result<T> = std::result::Result<T, MmbError>;

/// Errors that can occur when working with MMB archives
#[derive(Debug, Error)]
pub enum MmbError {
    /// I/O error occurred while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive or source image file does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Archive file does not have the fixed MMB size
    #[error("Invalid archive: expected {expected} bytes, found {actual}")]
    InvalidArchive {
        /// Required size in bytes
        expected: u64,
        /// Size of the file on disk
        actual: u64,
    },

    /// A value passed in was missing, malformed or the wrong length
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Stored image name is not ASCII
    #[error("Image name at index {index} is not valid ASCII")]
    Decode {
        /// Slot index
        index: usize,
    },

    /// Load attempted onto an image that is not erased
    #[error("Attempt to overwrite an existing image at index {index}")]
    OverwriteRejected {
        /// Slot index
        index: usize,
    },

    /// Slot index outside the archive
    #[error("Invalid image index {index} (max: {max})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Highest valid index
        max: usize,
    },
}

impl MmbError {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        MmbError::NotFound(message.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        MmbError::InvalidArgument(message.into())
    }
}

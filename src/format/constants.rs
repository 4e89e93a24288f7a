/// MMB archive layout constants

/// Number of image slots in an archive
pub const IMAGE_COUNT: usize = 511;

/// Highest valid slot index
pub const MAX_INDEX: usize = IMAGE_COUNT - 1;

/// Size of the reserved archive header
pub const ARCHIVE_HEADER_SIZE: u64 = 16;

/// Size of each per-image header (name + status)
pub const IMAGE_HEADER_SIZE: u64 = 16;

/// Size of an SSD image payload (80 tracks x 10 sectors x 256 bytes)
pub const IMAGE_DATA_SIZE: usize = 204_800;

/// Bytes of the image header given over to the name
pub const NAME_LENGTH: usize = 15;

/// Offset of the status byte within an image header
pub const STATUS_OFFSET: u64 = NAME_LENGTH as u64;

/// Status byte for an erased slot
pub const STATUS_NOT_INITIALISED: u8 = 0xF0;

/// Status byte for a locked image
pub const STATUS_LOCKED: u8 = 0x0F;

/// Status byte for an unlocked image
pub const STATUS_UNLOCKED: u8 = 0x00;

/// Offset of the first data block, directly after the header table
pub const DATA_AREA_OFFSET: u64 = ARCHIVE_HEADER_SIZE + IMAGE_COUNT as u64 * IMAGE_HEADER_SIZE;

/// Exact size of a valid archive file
pub const ARCHIVE_SIZE: u64 =
    ARCHIVE_HEADER_SIZE + IMAGE_COUNT as u64 * (IMAGE_HEADER_SIZE + IMAGE_DATA_SIZE as u64);

/// Byte offset of the header for the image at `index`
#[inline]
pub fn header_offset(index: usize) -> u64 {
    ARCHIVE_HEADER_SIZE + index as u64 * IMAGE_HEADER_SIZE
}

/// Byte offset of the data block for the image at `index`
#[inline]
pub fn data_offset(index: usize) -> u64 {
    DATA_AREA_OFFSET + index as u64 * IMAGE_DATA_SIZE as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_size() {
        assert_eq!(ARCHIVE_SIZE, 104_660_992);
    }

    #[test]
    fn test_data_area_follows_headers() {
        assert_eq!(DATA_AREA_OFFSET, 8192);
        assert_eq!(header_offset(IMAGE_COUNT), DATA_AREA_OFFSET);
    }

    #[test]
    fn test_header_offsets() {
        assert_eq!(header_offset(0), 16);
        assert_eq!(header_offset(1), 32);
        assert_eq!(header_offset(MAX_INDEX), 16 + 510 * 16);
    }

    #[test]
    fn test_data_offsets() {
        assert_eq!(data_offset(0), 8192);
        assert_eq!(data_offset(1), 8192 + 204_800);
        // Last block ends exactly at the end of the file
        assert_eq!(data_offset(MAX_INDEX) + IMAGE_DATA_SIZE as u64, ARCHIVE_SIZE);
    }
}

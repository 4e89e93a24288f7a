/*!
# mmbmanager

A Rust library for reading and writing BBC Micro MMB archives.

An MMB file is a fixed-size container holding 511 single-sided 200K disk
images (`.ssd`), each with a 15 character name and a status byte. This is
the format used by MMC/SD card interfaces such as MMFS and Turbo MMC.

## Features

- Validate an archive by its exact size
- Read and write image names, status and raw data in place
- Load `.ssd` files into erased slots with overwrite protection
- Save images back out to `.ssd` files

## Quick Start

```rust,no_run
use mmbmanager::{Archive, ImageStatus};

// Open an existing MMB file
let mut archive = Archive::open("BEEB.MMB")?;

// List the images
for entry in archive.catalogue()? {
    if entry.status.is_occupied() {
        println!("{}", entry);
    }
}

// Load an SSD into the first slot, refusing to overwrite
archive.get(0)?.load_from_file("elite.ssd", None, false)?;

// Protect it
archive.get(0)?.set_status(ImageStatus::Locked)?;

// Save another image back out
archive.get(12)?.save_to_file("repton.ssd")?;
# Ok::<(), mmbmanager::MmbError>(())
```

## Modules

- `archive`: Archive container, image slots and catalogue
- `format`: MMB layout constants and status encoding
- `io`: Positioned reads and writes against the archive file
- `error`: Error types and Result alias
*/

#![warn(missing_docs)]

/// Archive container, image slots and catalogue
pub mod archive;
/// Error types and Result alias
pub mod error;
/// MMB layout constants and status encoding
pub mod format;
/// Positioned reads and writes against the archive file
pub mod io;

// Re-export common types
pub use archive::{Archive, CatalogueEntry, ImageSlot};
pub use error::{MmbError, Result};
pub use format::{ImageStatus, ARCHIVE_SIZE, IMAGE_COUNT, IMAGE_DATA_SIZE, MAX_INDEX};

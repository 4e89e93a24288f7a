/// Positioned I/O against the backing archive file

/// Positioned reads
pub mod reader;
/// Positioned writes
pub mod writer;

pub use reader::{read_at, regular_file_size};
pub use writer::{write_at, write_file};

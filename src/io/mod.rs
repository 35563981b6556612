//! I/O layer: decoding source photographs and writing finished prints.
pub mod reader;
pub use reader::{SUPPORTED_EXTENSIONS, is_supported_image, read_rgb_image};

pub mod writers;

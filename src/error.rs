//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode, resize, and encode errors, and provides
//! semantic variants for argument validation and processing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Resize buffer error: {0}")]
    ResizeBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("JPEG encode error: {0}")]
    Encode(#[from] jpeg_encoder::EncodingError),

    #[error("Invalid aspect ratio: {value}. Expected W:H with positive integers")]
    InvalidRatio { value: String },

    #[error("Invalid print size: {value}. Expected WxH inches with positive integers")]
    InvalidSize { value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("No print targets configured")]
    EmptyTargets,

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn processing<E: std::fmt::Display>(e: E) -> Self {
        Error::Processing(e.to_string())
    }
}

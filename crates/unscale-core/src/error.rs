use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnscaleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error(
        "Screenshots not of the same resolution (\"{image}\" is {width}x{height}, expected {expected_width}x{expected_height})"
    )]
    InputSizeMismatch {
        image: String,
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No frames could be read from \"{0}\"")]
    NoFrames(String),

    #[error("No images supplied")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, UnscaleError>;

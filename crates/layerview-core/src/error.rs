use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayerViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization failed: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid layer dimensions: {width}x{height} (expected {expected_width}x{expected_height})")]
    InvalidDimensions {
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    #[error("Volume has no layers")]
    EmptyVolume,

    #[error("Layer index {index} out of range (total: {total})")]
    LayerIndexOutOfRange { index: usize, total: usize },

    #[error("Invalid run mode: {0} (expected 1, 2 or 3)")]
    InvalidRunMode(u8),
}

pub type Result<T> = std::result::Result<T, LayerViewError>;

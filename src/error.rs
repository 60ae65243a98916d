use thiserror::Error;

use crate::qrcode::DataTooLong;

/// Everything that can go wrong between content and a finished SVG.
///
/// Classification and piece rendering are infallible; errors only come from encoding, the
/// configuration, and the images and files around the render.
#[derive(Debug, Error)]
pub enum Error {
    #[error("content does not fit in a QR code: {0}")]
    DataTooLong(#[from] DataTooLong),
    #[error("invalid module grid: {0}")]
    InvalidGrid(String),
    #[error("invalid render config: {0}")]
    InvalidConfig(String),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

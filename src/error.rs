use thiserror::Error;

/// Errors produced by the pattern generators.
#[derive(Error, Debug)]
pub enum Error {
    /// The resolution / grid-count pair cannot produce any cells.
    #[error("invalid grid spec: {0}")]
    InvalidGridSpec(String),
    /// The encoder rejected the output path or format.
    #[error("image encoding failed: {0}")]
    Encoding(#[from] image::ImageError),
}

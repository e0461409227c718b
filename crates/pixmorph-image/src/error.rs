/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when an image dimension is zero.
    #[error("Image size must be non-zero, got {0}x{1}")]
    ZeroSize(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Image size mismatch: {0}x{1} vs {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the number of interpolation steps is not valid.
    #[error("Number of steps must be at least 1, got {0}")]
    InvalidNumSteps(usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel index (row: {0}, col: {1}) out of bounds for image of {2}x{3}")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),
}

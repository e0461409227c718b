/// An error type for the viz module.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// Error writing to the output.
    #[error("Failed to write the frame. {0}")]
    WriteError(#[from] std::io::Error),

    /// Error encoding or saving the frame.
    #[error("Failed to save the frame. {0}")]
    SaveError(#[from] pixmorph_io::IoError),

    /// Error producing the frame.
    #[error("Failed to produce the frame. {0}")]
    FrameError(#[from] pixmorph_image::ImageError),
}

#![deny(missing_docs)]
//! Immutable pixel grid types for the pixmorph image transforms

/// image representation for the transform operations.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize, Rgb8};

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// alpha blending of two images.
pub mod blend;

/// color transformations module.
pub mod color;

/// image flipping module.
pub mod flip;

/// morph sequences between two images.
pub mod morph;

/// utility functions for resizing images.
pub mod resize;

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and decoding failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image_ppm`] to load an image from disk.
pub mod functional;

/// ASCII pixel map (`P3`) decoding and encoding.
pub mod ppm;

/// Plain text dumps of pixel values.
pub mod text;

pub use crate::error::IoError;
pub use crate::functional::{read_image_ppm, read_image_ppm_with, write_image_ppm};
pub use crate::ppm::{
    decode_ppm, decode_ppm_with, encode_ppm, MaxValuePolicy, PpmDecodeOptions, PpmError,
};

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the viz module.
pub mod error;

/// The frame sink abstraction and frame playback.
pub mod sink;

/// Frame sink writing numbered PPM files.
pub mod sequence;

/// Frame sink painting on an ANSI terminal.
pub mod terminal;

pub use crate::error::VizError;
pub use crate::sequence::PpmSequenceWriter;
pub use crate::sink::{play, FrameSink};
pub use crate::terminal::TerminalSink;

use std::time::Duration;

use pixmorph_image::{Image, ImageError};

use crate::error::VizError;

/// A destination for image frames, such as a terminal or a directory.
///
/// Sinks own all presentation concerns: canvas sizing, coordinate mapping and
/// pacing between frames.
pub trait FrameSink {
    /// Present one frame, then hold it for `pacing` if the sink supports it.
    fn paint(&mut self, frame: &Image<u8, 3>, pacing: Duration) -> Result<(), VizError>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn paint(&mut self, frame: &Image<u8, 3>, pacing: Duration) -> Result<(), VizError> {
        (**self).paint(frame, pacing)
    }
}

impl<S: FrameSink + ?Sized> FrameSink for Box<S> {
    fn paint(&mut self, frame: &Image<u8, 3>, pacing: Duration) -> Result<(), VizError> {
        (**self).paint(frame, pacing)
    }
}

/// Paint every frame of a sequence in order.
///
/// Stops at the first frame that fails to be produced or painted.
///
/// # Arguments
///
/// * `frames` - The frames to paint, e.g. from `pixmorph_imgproc::morph::morph_frames`.
/// * `sink` - Where to paint the frames.
/// * `pacing` - How long each frame is held.
///
/// # Returns
///
/// The number of frames painted.
pub fn play<I, S>(frames: I, sink: &mut S, pacing: Duration) -> Result<usize, VizError>
where
    I: IntoIterator<Item = Result<Image<u8, 3>, ImageError>>,
    S: FrameSink + ?Sized,
{
    let mut painted = 0;
    for frame in frames {
        sink.paint(&frame?, pacing)?;
        painted += 1;
        log::trace!("painted frame {}", painted);
    }
    Ok(painted)
}

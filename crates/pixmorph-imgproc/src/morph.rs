use std::borrow::Cow;

use pixmorph_image::{Image, ImageDtype, ImageError};

use crate::{blend::blend, resize::resize_nearest};

/// Weight of the source image in frame `step` of a morph with `steps` steps.
///
/// Goes linearly from `1.0` at step `0` to `0.0` at step `steps`. Steps past
/// the end stay at `0.0`.
pub fn morph_alpha(step: usize, steps: usize) -> f64 {
    steps.saturating_sub(step) as f64 / steps as f64
}

/// Lazy sequence of frames interpolating a source image into a target image.
///
/// Created by [`morph_frames`]. Yields exactly `steps + 1` frames; the first one
/// equals the source and the last one equals the (possibly resized) target.
pub struct MorphFrames<'a, T, const C: usize>
where
    T: Clone,
{
    source: &'a Image<T, C>,
    target: Cow<'a, Image<T, C>>,
    steps: usize,
    next: usize,
}

impl<T, const C: usize> MorphFrames<'_, T, C>
where
    T: Clone,
{
    /// The number of interpolation steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The target image, resized to the source size if needed.
    pub fn target(&self) -> &Image<T, C> {
        &self.target
    }
}

impl<T, const C: usize> Iterator for MorphFrames<'_, T, C>
where
    T: ImageDtype,
{
    type Item = Result<Image<T, C>, ImageError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.steps {
            return None;
        }
        let alpha = morph_alpha(self.next, self.steps);
        self.next += 1;
        Some(blend(self.source, &self.target, alpha))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps + 1 - self.next;
        (remaining, Some(remaining))
    }
}

impl<T, const C: usize> ExactSizeIterator for MorphFrames<'_, T, C> where T: ImageDtype {}

/// Create the lazy morph sequence from `source` to `target` in `steps` steps.
///
/// If the target size differs from the source size, the target is first resized
/// to the source size with [`resize_nearest`]. The source is never resized.
///
/// Frame `i` is `blend(source, target, (steps - i) / steps)`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidNumSteps`] if `steps` is zero.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_imgproc::morph::morph_frames;
///
/// let size = ImageSize { width: 1, height: 1 };
/// let black = Image::<u8, 3>::new(size, vec![0, 0, 0]).unwrap();
/// let white = Image::<u8, 3>::new(size, vec![200, 200, 200]).unwrap();
///
/// let frames = morph_frames(&black, &white, 4).unwrap();
/// assert_eq!(frames.len(), 5);
///
/// let values = frames
///     .map(|frame| frame.map(|f| f.as_slice()[0]))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(values, vec![0, 50, 100, 150, 200]);
/// ```
pub fn morph_frames<'a, T, const C: usize>(
    source: &'a Image<T, C>,
    target: &'a Image<T, C>,
    steps: usize,
) -> Result<MorphFrames<'a, T, C>, ImageError>
where
    T: ImageDtype,
{
    if steps == 0 {
        return Err(ImageError::InvalidNumSteps(steps));
    }

    let target = if target.size() != source.size() {
        Cow::Owned(resize_nearest(target, source.size())?)
    } else {
        Cow::Borrowed(target)
    };

    Ok(MorphFrames {
        source,
        target,
        steps,
        next: 0,
    })
}

/// Morph `source` into `target` in `steps` steps and collect all the frames.
///
/// See [`morph_frames`] for the frame formula and the resizing rule.
///
/// # Errors
///
/// Returns [`ImageError::InvalidNumSteps`] if `steps` is zero.
pub fn morph<T, const C: usize>(
    source: &Image<T, C>,
    target: &Image<T, C>,
    steps: usize,
) -> Result<Vec<Image<T, C>>, ImageError>
where
    T: ImageDtype,
{
    morph_frames(source, target, steps)?.collect()
}

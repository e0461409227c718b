use pixmorph_image::{Image, ImageDtype, ImageError};

/// Blend two pixels channel by channel.
///
/// Each channel is `floor(alpha * a + (1 - alpha) * b)`, saturated to the
/// channel type. Equal channels are returned unchanged. `alpha` is expected
/// in `[0, 1]` but is not checked.
///
/// # Example
///
/// ```
/// use pixmorph_imgproc::blend::blend_pixel;
///
/// let c = blend_pixel(&[255u8, 0, 0], &[0u8, 0, 255], 0.5);
/// assert_eq!(c, [127, 0, 127]);
/// ```
pub fn blend_pixel<T, const C: usize>(a: &[T; C], b: &[T; C], alpha: f64) -> [T; C]
where
    T: ImageDtype,
{
    let mut out = [T::default(); C];
    blend_channels(a, b, alpha, &mut out);
    out
}

// NOTE: equal channels are copied through, so blending an image with itself
// returns the same image for every alpha.
fn blend_channels<T: ImageDtype>(a: &[T], b: &[T], alpha: f64, out: &mut [T]) {
    out.iter_mut()
        .zip(a.iter().zip(b.iter()))
        .for_each(|(o, (&va, &vb))| {
            let (fa, fb): (f64, f64) = (va.into(), vb.into());
            *o = if fa == fb {
                va
            } else {
                T::from_f64(alpha * fa + (1.0 - alpha) * fb)
            };
        });
}

/// Blend two images of the same size.
///
/// # Arguments
///
/// * `src1` - The first input image, weighted by `alpha`.
/// * `src2` - The second input image, weighted by `1 - alpha`.
/// * `alpha` - The weight of the first image.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the images differ in size.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_imgproc::blend::blend;
///
/// let size = ImageSize { width: 1, height: 1 };
/// let red = Image::<u8, 3>::new(size, vec![255, 0, 0]).unwrap();
/// let blue = Image::<u8, 3>::new(size, vec![0, 0, 255]).unwrap();
///
/// let purple = blend(&red, &blue, 0.5).unwrap();
/// assert_eq!(purple.as_slice(), &[127, 0, 127]);
/// ```
pub fn blend<T, const C: usize>(
    src1: &Image<T, C>,
    src2: &Image<T, C>,
    alpha: f64,
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    let mut data = vec![T::default(); src1.as_slice().len()];
    blend_channels(src1.as_slice(), src2.as_slice(), alpha, &mut data);

    Image::new(src1.size(), data)
}

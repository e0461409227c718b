use pixmorph_image::{Image, ImageDtype, ImageError};

/// Define the RGB weights for the grayscale conversion.
const RW: f64 = 0.299;
const GW: f64 = 0.587;
const BW: f64 = 0.114;

/// Luminance of a single RGB pixel, truncated to the channel type.
fn luminance<T: ImageDtype>(pixel: &[T]) -> T {
    let r: f64 = pixel[0].into();
    let g: f64 = pixel[1].into();
    let b: f64 = pixel[2].into();
    T::from_f64(RW * r + GW * g + BW * b)
}

/// Convert an RGB image to a single channel luminance image using the formula:
///
/// Y = floor(0.299 * R + 0.587 * G + 0.114 * B)
///
/// The weighted sum is computed in `f64` and truncated, not rounded.
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_imgproc::color::gray_from_rgb;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![255, 0, 0],
/// )
/// .unwrap();
///
/// let gray = gray_from_rgb(&image).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.as_slice(), &[76]);
/// ```
pub fn gray_from_rgb<T>(src: &Image<T, 3>) -> Result<Image<T, 1>, ImageError>
where
    T: ImageDtype,
{
    let data = src.as_slice().chunks_exact(3).map(luminance).collect();
    Image::new(src.size(), data)
}

/// Convert a grayscale image to an RGB image by replicating the grayscale
/// value across all three channels.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
pub fn rgb_from_gray<T>(src: &Image<T, 1>) -> Result<Image<T, 3>, ImageError>
where
    T: Copy,
{
    Image::from_pixels(src.size(), src.as_slice().iter().map(|&v| [v, v, v]))
}

/// Reduce an RGB image to its luminance, keeping three channels.
///
/// Every output pixel is `(L, L, L)` with `L` computed as in [`gray_from_rgb`].
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_imgproc::color::grayscale;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0, 255, 0, 100, 150, 200],
/// )
/// .unwrap();
///
/// let gray = grayscale(&image).unwrap();
/// assert_eq!(gray.as_slice(), &[149, 149, 149, 140, 140, 140]);
/// ```
pub fn grayscale<T>(src: &Image<T, 3>) -> Result<Image<T, 3>, ImageError>
where
    T: ImageDtype,
{
    let pixels = src.as_slice().chunks_exact(3).map(|pixel| {
        let l = luminance(pixel);
        [l, l, l]
    });
    Image::from_pixels(src.size(), pixels)
}

#[cfg(test)]
mod tests {
    use pixmorph_image::{Image, ImageError, ImageSize};

    #[test]
    fn gray_from_rgb_regression() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![
                255, 0, 0,
                0, 255, 0,
                0, 0, 255,
                255, 255, 255,
                10, 20, 30,
                0, 0, 0,
            ],
        )?;

        let gray = super::gray_from_rgb(&image)?;

        assert_eq!(gray.size(), image.size());
        assert_eq!(gray.as_slice(), &[76, 149, 29, 255, 18, 0]);

        Ok(())
    }

    #[test]
    fn gray_truncates_instead_of_rounding() -> Result<(), ImageError> {
        // 0.299 + 0.587 + 0.114 lands just below 1.0 for these inputs
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![128, 128, 128, 1, 1, 1],
        )?;

        let gray = super::gray_from_rgb(&image)?;
        assert_eq!(gray.as_slice(), &[127, 0]);

        Ok(())
    }

    #[test]
    fn gray_from_rgb_f32() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        )?;

        let gray = super::gray_from_rgb(&image)?;

        let expected = [0.299f32, 0.587, 0.114];
        for (a, b) in gray.as_slice().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-6);
        }

        Ok(())
    }

    #[test]
    fn rgb_from_grayscale() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![7, 42],
        )?;

        let rgb = super::rgb_from_gray(&image)?;
        assert_eq!(rgb.as_slice(), &[7, 7, 7, 42, 42, 42]);

        Ok(())
    }

    #[test]
    fn grayscale_channels_are_equal() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![12, 200, 33, 255, 1, 90, 0, 0, 0, 77, 77, 77],
        )?;

        let gray = super::grayscale(&image)?;
        assert_eq!(gray.size(), image.size());
        assert_eq!(
            gray,
            super::rgb_from_gray(&super::gray_from_rgb(&image)?)?
        );
        for pixel in gray.as_slice().chunks_exact(3) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }

        Ok(())
    }
}

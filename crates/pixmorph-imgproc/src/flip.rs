use pixmorph_image::{Image, ImageError};

/// Flip the input image horizontally.
///
/// Every row is mirrored: `dst[r][c] = src[r][cols - 1 - c]`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_imgproc::flip::horizontal_flip;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8; 2 * 3 * 3],
/// )
/// .unwrap();
///
/// let flipped = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn horizontal_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    let mut data = Vec::with_capacity(src.as_slice().len());

    src.as_slice()
        .chunks_exact(src.cols() * C)
        .for_each(|row| {
            row.chunks_exact(C)
                .rev()
                .for_each(|pixel| data.extend_from_slice(pixel));
        });

    Image::new(src.size(), data)
}

/// Flip the input image vertically.
///
/// The row order is reversed: `dst[r] = src[rows - 1 - r]`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_imgproc::flip::vertical_flip;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0u8; 2 * 3 * 3],
/// )
/// .unwrap();
///
/// let flipped = vertical_flip(&image).unwrap();
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn vertical_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    let mut data = Vec::with_capacity(src.as_slice().len());

    src.as_slice()
        .chunks_exact(src.cols() * C)
        .rev()
        .for_each(|row| data.extend_from_slice(row));

    Image::new(src.size(), data)
}

#[cfg(test)]
mod tests {
    use pixmorph_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_hflip() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0u8, 1, 2, 3, 4, 5],
        )?;
        let data_expected = vec![1u8, 0, 3, 2, 5, 4];
        let flipped = super::horizontal_flip(&image)?;
        assert_eq!(flipped.as_slice(), &data_expected);
        Ok(())
    }

    #[test]
    fn test_vflip() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0u8, 1, 2, 3, 4, 5],
        )?;
        let data_expected = vec![4u8, 5, 2, 3, 0, 1];
        let flipped = super::vertical_flip(&image)?;
        assert_eq!(flipped.as_slice(), &data_expected);
        Ok(())
    }

    #[test]
    fn test_hflip_keeps_channel_order() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![
                1, 2, 3,
                4, 5, 6,
                7, 8, 9,
            ],
        )?;
        let flipped = super::horizontal_flip(&image)?;
        assert_eq!(flipped.as_slice(), &[7, 8, 9, 4, 5, 6, 1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_flip_single_pixel() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![10, 20, 30],
        )?;
        assert_eq!(super::horizontal_flip(&image)?, image);
        assert_eq!(super::vertical_flip(&image)?, image);
        Ok(())
    }
}

use pixmorph_image::{Image, ImageError, ImageSize};

/// Resize an image to a new size with nearest neighbor sampling.
///
/// Each output coordinate `(x, y)` copies the source pixel at
///
/// ```text
/// src_x = x * src_width / dst_width
/// src_y = y * src_height / dst_height
/// ```
///
/// using integer (floor) division, so no pixel values are ever mixed. Upscaling
/// produces blocks of repeated pixels and downscaling drops pixels.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `new_size` - The size of the output image.
///
/// # Returns
///
/// The resized image with exactly `new_size` pixels.
///
/// # Errors
///
/// Returns [`ImageError::ZeroSize`] if one of the target dimensions is zero.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_imgproc::resize::resize_nearest;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let image_resized = resize_nearest(&image, new_size).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_nearest<T, const C: usize>(
    src: &Image<T, C>,
    new_size: ImageSize,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    if new_size.width == 0 || new_size.height == 0 {
        return Err(ImageError::ZeroSize(new_size.width, new_size.height));
    }

    let (src_cols, src_rows) = (src.cols(), src.rows());
    let src_data = src.as_slice();

    // precompute the source column of every output column
    let src_x = (0..new_size.width)
        .map(|x| x * src_cols / new_size.width)
        .collect::<Vec<_>>();

    let mut data = Vec::with_capacity(new_size.width * new_size.height * C);

    for y in 0..new_size.height {
        let sy = y * src_rows / new_size.height;
        let src_row = &src_data[sy * src_cols * C..(sy + 1) * src_cols * C];
        for &sx in src_x.iter() {
            data.extend_from_slice(&src_row[sx * C..(sx + 1) * C]);
        }
    }

    Image::new(new_size, data)
}

/// Scale an image to `width` x `height` pixels.
///
/// Shorthand for [`resize_nearest`] taking the target dimensions separately.
pub fn scale<T, const C: usize>(
    src: &Image<T, C>,
    width: usize,
    height: usize,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    resize_nearest(src, ImageSize { width, height })
}

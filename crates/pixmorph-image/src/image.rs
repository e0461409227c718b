use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixmorph_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for the channel types the arithmetic operations work on.
///
/// Values are computed in `f64` and brought back with [`ImageDtype::from_f64`].
pub trait ImageDtype: Copy + Default + Into<f64> {
    /// Convert a f64 value to the channel type, truncating toward zero and
    /// saturating to the type range.
    fn from_f64(x: f64) -> Self;
}

impl ImageDtype for u8 {
    fn from_f64(x: f64) -> Self {
        x.trunc().clamp(0.0, u8::MAX as f64) as u8
    }
}

impl ImageDtype for u16 {
    fn from_f64(x: f64) -> Self {
        x.trunc().clamp(0.0, u16::MAX as f64) as u16
    }
}

impl ImageDtype for f32 {
    fn from_f64(x: f64) -> Self {
        x as f32
    }
}

impl ImageDtype for f64 {
    fn from_f64(x: f64) -> Self {
        x
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major in a single buffer with shape (H, W, C).
/// An image cannot be modified once built: every operation on it produces a
/// new image.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// An 8-bit RGB image.
pub type Rgb8 = Image<u8, 3>;

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If one of the dimensions is zero, or the length of the pixel data does
    /// not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmorph_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::ZeroSize(size.width, size.height));
        }

        // check if the data length matches the image size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and all channels set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmorph_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Create a new image from an iterator of pixels given in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of pixels does not match the image size.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixmorph_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_pixels(
    ///     ImageSize { width: 2, height: 1 },
    ///     [[255, 0, 0], [0, 255, 0]],
    /// ).unwrap();
    ///
    /// assert_eq!(image.pixel(0, 1), Some([0, 255, 0]));
    /// ```
    pub fn from_pixels<I>(size: ImageSize, pixels: I) -> Result<Self, ImageError>
    where
        I: IntoIterator<Item = [T; CHANNELS]>,
    {
        let mut data = Vec::with_capacity(size.width * size.height * CHANNELS);
        for pixel in pixels {
            data.extend(pixel);
        }
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice in (H, W, C) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the channel data of a single row, or `None` if the row is out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        let stride = self.size.width * CHANNELS;
        self.data.get(row * stride..(row + 1) * stride)
    }

    /// Get the pixel at the given position, or `None` if it is out of bounds.
    pub fn pixel(&self, row: usize, col: usize) -> Option<[T; CHANNELS]>
    where
        T: Copy,
    {
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        let base = (row * self.size.width + col) * CHANNELS;
        Some(std::array::from_fn(|c| self.data[base + c]))
    }

    /// Get the pixel at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the position is outside the image.
    pub fn get_pixel(&self, row: usize, col: usize) -> Result<[T; CHANNELS], ImageError>
    where
        T: Copy,
    {
        self.pixel(row, col).ok_or(ImageError::PixelIndexOutOfBounds(
            row,
            col,
            self.size.width,
            self.size.height,
        ))
    }

    /// Consume the image and return the underlying pixel buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

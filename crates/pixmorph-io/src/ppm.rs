use pixmorph_image::{Image, ImageError, ImageSize};

/// The magic token of the ASCII pixel map format.
pub const PPM_MAGIC: &str = "P3";

/// Error types for the PPM module.
#[derive(Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum PpmError {
    /// The stream is not valid text.
    #[error("PPM stream is not valid ASCII text. {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// The stream is empty.
    #[error("Missing PPM magic token")]
    MissingMagic,

    /// The magic token is not `P3`.
    #[error("Unsupported PPM magic token. Got: {0}")]
    UnsupportedMagic(String),

    /// A header field is missing.
    #[error("Missing PPM header field: {0}")]
    MissingToken(&'static str),

    /// A token could not be parsed as an integer.
    #[error("Invalid integer for PPM {field}. Got: {token}")]
    InvalidToken {
        /// The field that was being parsed.
        field: &'static str,
        /// The offending token.
        token: String,
    },

    /// The header declares an empty or negative size.
    #[error("Invalid PPM dimensions {0}x{1}")]
    InvalidDimensions(i64, i64),

    /// The header declares a max value that cannot be used for rescaling.
    #[error("Invalid PPM max value: {0}")]
    InvalidMaxValue(i64),

    /// The stream ends before all the samples were read.
    #[error("Expected {expected} PPM samples, found {found}")]
    NotEnoughSamples {
        /// Number of samples declared by the header.
        expected: usize,
        /// Number of samples present in the stream.
        found: usize,
    },

    /// Failed to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] ImageError),
}

/// What to do with the max value declared in the PPM header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxValuePolicy {
    /// Read the max value and discard it; samples are stored as written.
    #[default]
    Ignore,
    /// Rescale every sample `s` to `floor(s * 255 / max_value)`.
    Rescale,
}

/// Options for decoding PPM streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PpmDecodeOptions {
    /// How the declared max value is used.
    pub max_value: MaxValuePolicy,
}

/// Split the stream into whitespace separated tokens, dropping `#` comments.
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(str::split_ascii_whitespace)
}

fn parse_int(field: &'static str, token: &str) -> Result<i64, PpmError> {
    token.parse::<i64>().map_err(|_| PpmError::InvalidToken {
        field,
        token: token.to_string(),
    })
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<i64, PpmError> {
    let token = tokens.next().ok_or(PpmError::MissingToken(field))?;
    parse_int(field, token)
}

/// Decode an ASCII pixel map (`P3`) into an RGB image.
///
/// The max value of the header is read and ignored, samples are stored as
/// written and saturated to `[0, 255]`. Use [`decode_ppm_with`] to rescale.
///
/// # Arguments
///
/// * `bytes` - The PPM stream.
///
/// # Returns
///
/// An image with `height` rows and `width` columns.
///
/// # Example
///
/// ```
/// use pixmorph_io::ppm::decode_ppm;
///
/// let image = decode_ppm(b"P3 2 1 255 255 0 0 0 255 0").unwrap();
///
/// assert_eq!(image.rows(), 1);
/// assert_eq!(image.cols(), 2);
/// assert_eq!(image.pixel(0, 0), Some([255, 0, 0]));
/// assert_eq!(image.pixel(0, 1), Some([0, 255, 0]));
/// ```
pub fn decode_ppm(bytes: &[u8]) -> Result<Image<u8, 3>, PpmError> {
    decode_ppm_with(bytes, PpmDecodeOptions::default())
}

/// Decode an ASCII pixel map (`P3`) into an RGB image with the given options.
///
/// # Errors
///
/// Returns a [`PpmError`] if the magic token is missing or wrong, a header
/// field is missing or not an integer, the size is not positive, or there are
/// fewer than `width * height * 3` samples.
pub fn decode_ppm_with(
    bytes: &[u8],
    options: PpmDecodeOptions,
) -> Result<Image<u8, 3>, PpmError> {
    let text = std::str::from_utf8(bytes)?;
    let mut tokens = tokens(text);

    match tokens.next() {
        None => return Err(PpmError::MissingMagic),
        Some(PPM_MAGIC) => {}
        Some(other) => return Err(PpmError::UnsupportedMagic(other.to_string())),
    }

    let width = next_int(&mut tokens, "width")?;
    let height = next_int(&mut tokens, "height")?;
    let max_value = next_int(&mut tokens, "max value")?;

    if width <= 0 || height <= 0 {
        return Err(PpmError::InvalidDimensions(width, height));
    }

    if options.max_value == MaxValuePolicy::Rescale && max_value <= 0 {
        return Err(PpmError::InvalidMaxValue(max_value));
    }

    let size = ImageSize {
        width: width as usize,
        height: height as usize,
    };

    let expected = size
        .width
        .checked_mul(size.height)
        .and_then(|n| n.checked_mul(3))
        .ok_or(PpmError::InvalidDimensions(width, height))?;

    // every sample takes at least one byte of the stream
    let mut data = Vec::with_capacity(expected.min(bytes.len()));

    for token in tokens.by_ref().take(expected) {
        let sample = parse_int("sample", token)?;
        let sample = match options.max_value {
            MaxValuePolicy::Ignore => sample,
            MaxValuePolicy::Rescale => sample.saturating_mul(255) / max_value,
        };
        data.push(sample.clamp(0, 255) as u8);
    }

    if data.len() < expected {
        return Err(PpmError::NotEnoughSamples {
            expected,
            found: data.len(),
        });
    }

    Ok(Image::new(size, data)?)
}

/// Encode an RGB image as an ASCII pixel map (`P3`) with max value 255.
///
/// The header takes three lines, followed by one line per image row.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_io::ppm::encode_ppm;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![255, 0, 0, 0, 255, 0],
/// )
/// .unwrap();
///
/// assert_eq!(encode_ppm(&image), "P3\n2 1\n255\n255 0 0 0 255 0\n");
/// ```
pub fn encode_ppm(image: &Image<u8, 3>) -> String {
    let mut out = format!("{}\n{} {}\n255\n", PPM_MAGIC, image.cols(), image.rows());

    for row in image.as_slice().chunks_exact(image.cols() * 3) {
        let line = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }

    out
}

use std::path::Path;

use pixmorph_image::Image;

use crate::error::IoError;
use crate::ppm::{decode_ppm_with, encode_ppm, PpmDecodeOptions};

/// Verify the path exists and has a `ppm` extension.
fn check_ppm_path(file_path: &Path) -> Result<(), IoError> {
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("ppm"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    Ok(())
}

/// Reads an ASCII PPM image from the given file path.
///
/// The max value declared in the header is ignored.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM image.
///
/// # Returns
///
/// An RGB image containing the pixel data.
///
/// # Example
///
/// ```
/// use pixmorph_io::functional as F;
///
/// let image = F::read_image_ppm("../../tests/data/tinypic.ppm").unwrap();
///
/// assert_eq!(image.size().width, 4);
/// assert_eq!(image.size().height, 3);
/// assert_eq!(image.num_channels(), 3);
/// ```
pub fn read_image_ppm(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    read_image_ppm_with(file_path, PpmDecodeOptions::default())
}

/// Reads an ASCII PPM image from the given file path with the given decode options.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM image.
/// * `options` - The decoding options.
pub fn read_image_ppm_with(
    file_path: impl AsRef<Path>,
    options: PpmDecodeOptions,
) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();
    check_ppm_path(file_path)?;

    let bytes = std::fs::read(file_path)?;
    let image = decode_ppm_with(&bytes, options)?;

    log::debug!(
        "decoded {} as {}x{}",
        file_path.display(),
        image.cols(),
        image.rows()
    );

    Ok(image)
}

/// Writes the given RGB image to the given file path as an ASCII PPM.
///
/// # Arguments
///
/// * `file_path` - The path to the PPM image.
/// * `image` - The image to write.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    std::fs::write(file_path, encode_ppm(image))?;

    log::debug!(
        "wrote {}x{} image to {}",
        image.cols(),
        image.rows(),
        file_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::IoError;
    use crate::functional::{read_image_ppm, write_image_ppm};

    #[test]
    fn read_ppm() -> Result<(), IoError> {
        let image = read_image_ppm("../../tests/data/tinypic.ppm")?;
        assert_eq!(image.size().width, 4);
        assert_eq!(image.size().height, 3);
        assert_eq!(image.pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(image.pixel(2, 3), Some([64, 32, 16]));
        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let result = read_image_ppm("../../tests/data/missing.ppm");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_wrong_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.png");
        std::fs::write(&file_path, "P3 1 1 255 0 0 0")?;

        let result = read_image_ppm(&file_path);
        assert!(matches!(result, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }

    #[test]
    fn read_malformed_file() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("broken.PPM");
        std::fs::write(&file_path, "P3 2 2 255 0 0 0")?;

        let result = read_image_ppm(&file_path);
        assert!(matches!(result, Err(IoError::PpmDecodeError(_))));
        Ok(())
    }

    #[test]
    fn read_write_ppm() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        std::fs::create_dir_all(tmp_dir.path())?;

        let file_path = tmp_dir.path().join("tinypic.ppm");
        let image_data = read_image_ppm("../../tests/data/tinypic.ppm")?;
        write_image_ppm(&file_path, &image_data)?;

        let image_data_back = read_image_ppm(&file_path)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        assert_eq!(image_data_back, image_data);

        Ok(())
    }
}

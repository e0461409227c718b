use pixmorph_image::Image;

/// Format an RGB image as a table of `(R, G, B)` triples, one line per row.
///
/// Each channel is right aligned to three characters and every pixel is
/// followed by two spaces.
///
/// # Example
///
/// ```
/// use pixmorph_image::{Image, ImageSize};
/// use pixmorph_io::text::pixel_table;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![255, 0, 0, 7, 80, 9],
/// )
/// .unwrap();
///
/// assert_eq!(pixel_table(&image), "(255,   0,   0)  (  7,  80,   9)  \n");
/// ```
pub fn pixel_table(image: &Image<u8, 3>) -> String {
    let mut out = String::new();

    for row in image.as_slice().chunks_exact(image.cols() * 3) {
        for pixel in row.chunks_exact(3) {
            out.push_str(&format!(
                "({:3}, {:3}, {:3})  ",
                pixel[0], pixel[1], pixel[2]
            ));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use pixmorph_image::{Image, ImageError, ImageSize};

    #[test]
    fn pixel_table_rows() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![1, 22, 133, 0, 0, 0],
        )?;

        let table = super::pixel_table(&image);
        assert_eq!(table.lines().count(), 2);
        assert_eq!(table, "(  1,  22, 133)  \n(  0,   0,   0)  \n");

        Ok(())
    }
}

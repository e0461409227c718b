use argh::FromArgs;
use std::path::PathBuf;

use pixmorph::io::{functional as F, text};

#[derive(FromArgs)]
/// Print the RGB values of a PPM image, one line per row
struct Args {
    /// path to the input PPM image
    #[argh(positional)]
    image_path: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let image = F::read_image_ppm(&args.image_path)?;
    println!("{}: {}x{}", args.image_path.display(), image.cols(), image.rows());
    print!("{}", text::pixel_table(&image));

    Ok(())
}

use argh::FromArgs;
use std::{path::PathBuf, time::Duration};

use pixmorph::image::ImageError;
use pixmorph::imgproc::resize;
use pixmorph::io::{functional as F, IoError};
use pixmorph::viz::{FrameSink, PpmSequenceWriter, TerminalSink, VizError};

#[derive(FromArgs)]
/// Scale a PPM image with nearest neighbor sampling and show the source and the result
struct Args {
    /// path to the input PPM image
    #[argh(positional)]
    image_path: PathBuf,

    /// width of the scaled image in pixels
    #[argh(positional)]
    width: i64,

    /// height of the scaled image in pixels
    #[argh(positional)]
    height: i64,

    /// pause between the source and the result in milliseconds
    #[argh(option, default = "3000")]
    delay_ms: u64,

    /// write the images as PPM files to this directory instead of the terminal
    #[argh(option)]
    output_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("{0} must be a positive integer, got {1}")]
    InvalidArgument(&'static str, i64),

    #[error("Could not read the image. {0}")]
    Read(#[from] IoError),

    #[error("Image scaling failed. {0}")]
    Image(#[from] ImageError),

    #[error("Could not show the image. {0}")]
    Show(#[from] VizError),
}

fn positive(name: &'static str, value: i64) -> Result<usize, AppError> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(AppError::InvalidArgument(name, value)),
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let width = positive("width", args.width)?;
    let height = positive("height", args.height)?;

    let image = F::read_image_ppm(&args.image_path)?;
    let scaled = resize::scale(&image, width, height)?;
    log::info!(
        "scaled {}x{} image to {}x{}",
        image.cols(),
        image.rows(),
        scaled.cols(),
        scaled.rows()
    );

    let mut sink: Box<dyn FrameSink> = match &args.output_dir {
        Some(dir) => Box::new(PpmSequenceWriter::new(dir, "scale")?),
        None => Box::new(TerminalSink::stdout()),
    };

    sink.paint(&image, Duration::from_millis(args.delay_ms))?;
    sink.paint(&scaled, Duration::ZERO)?;

    Ok(())
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    if let Err(err) = run(args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

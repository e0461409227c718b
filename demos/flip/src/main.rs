use argh::FromArgs;
use std::{path::PathBuf, str::FromStr, time::Duration};

use pixmorph::image::{ImageError, Rgb8};
use pixmorph::imgproc::{color, flip};
use pixmorph::io::{functional as F, IoError};
use pixmorph::viz::{FrameSink, PpmSequenceWriter, TerminalSink, VizError};

/// The transform applied to the input image.
#[derive(Debug, Clone, Copy)]
enum Operation {
    FlipHorizontal,
    FlipVertical,
    Grayscale,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fh" => Ok(Operation::FlipHorizontal),
            "fv" => Ok(Operation::FlipVertical),
            "gs" => Ok(Operation::Grayscale),
            _ => Err(format!("unknown operation {s:?}, expected one of fh, fv, gs")),
        }
    }
}

impl Operation {
    fn apply(self, image: &Rgb8) -> Result<Rgb8, ImageError> {
        match self {
            Operation::FlipHorizontal => flip::horizontal_flip(image),
            Operation::FlipVertical => flip::vertical_flip(image),
            Operation::Grayscale => color::grayscale(image),
        }
    }
}

#[derive(FromArgs)]
/// Flip or grayscale a PPM image and show the source and the result
struct Args {
    /// path to the input PPM image
    #[argh(positional)]
    image_path: PathBuf,

    /// operation to apply: fh (flip horizontally), fv (flip vertically) or gs (grayscale)
    #[argh(positional)]
    operation: Operation,

    /// pause between the source and the result in milliseconds
    #[argh(option, default = "3000")]
    delay_ms: u64,

    /// write the images as PPM files to this directory instead of the terminal
    #[argh(option)]
    output_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Could not read the image. {0}")]
    Read(#[from] IoError),

    #[error("Image operation failed. {0}")]
    Image(#[from] ImageError),

    #[error("Could not show the image. {0}")]
    Show(#[from] VizError),
}

fn run(args: Args) -> Result<(), AppError> {
    let image = F::read_image_ppm(&args.image_path)?;
    let output = args.operation.apply(&image)?;
    log::info!(
        "applied {:?} to {}x{} image",
        args.operation,
        image.cols(),
        image.rows()
    );

    let mut sink: Box<dyn FrameSink> = match &args.output_dir {
        Some(dir) => Box::new(PpmSequenceWriter::new(dir, "flip")?),
        None => Box::new(TerminalSink::stdout()),
    };

    sink.paint(&image, Duration::from_millis(args.delay_ms))?;
    sink.paint(&output, Duration::ZERO)?;

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

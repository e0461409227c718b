use argh::FromArgs;
use std::{path::PathBuf, time::Duration};

use pixmorph::image::ImageError;
use pixmorph::imgproc::{color, morph};
use pixmorph::io::{functional as F, IoError};
use pixmorph::viz::{play, FrameSink, PpmSequenceWriter, TerminalSink, VizError};

#[derive(FromArgs)]
/// Morph a PPM image into its grayscale version and play the sequence
struct Args {
    /// path to the source PPM image
    #[argh(positional)]
    source_path: PathBuf,

    /// number of morphing steps
    #[argh(positional)]
    steps: i64,

    /// time each frame is shown in milliseconds
    #[argh(option, default = "100")]
    delay_ms: u64,

    /// write the frames as PPM files to this directory instead of the terminal
    #[argh(option)]
    output_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("{0} must be a positive integer, got {1}")]
    InvalidArgument(&'static str, i64),

    #[error("Could not read the image. {0}")]
    Read(#[from] IoError),

    #[error("Morphing failed. {0}")]
    Image(#[from] ImageError),

    #[error("Could not show the frames. {0}")]
    Show(#[from] VizError),
}

fn positive(name: &'static str, value: i64) -> Result<usize, AppError> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(AppError::InvalidArgument(name, value)),
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let steps = positive("steps", args.steps)?;

    let source = F::read_image_ppm(&args.source_path)?;
    let gray = color::grayscale(&source)?;

    let frames = morph::morph_frames(&source, &gray, steps)?;

    let mut sink: Box<dyn FrameSink> = match &args.output_dir {
        Some(dir) => Box::new(PpmSequenceWriter::new(dir, "gray_morph")?),
        None => Box::new(TerminalSink::stdout()),
    };

    let painted = play(frames, &mut sink, Duration::from_millis(args.delay_ms))?;
    log::info!("played {painted} frames");

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

#[cfg(test)]
mod tests {
    use super::{positive, AppError};

    #[test]
    fn positive_accepts_positive_integers() -> Result<(), AppError> {
        assert_eq!(positive("steps", 1)?, 1);
        assert_eq!(positive("steps", 50)?, 50);
        Ok(())
    }

    #[test]
    fn positive_rejects_zero_and_negatives() {
        assert!(matches!(
            positive("steps", 0),
            Err(AppError::InvalidArgument("steps", 0))
        ));
        assert!(matches!(
            positive("steps", -3),
            Err(AppError::InvalidArgument("steps", -3))
        ));
        assert_eq!(
            positive("width", -3).map_err(|e| e.to_string()),
            Err("width must be a positive integer, got -3".to_string())
        );
    }
}

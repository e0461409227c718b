use std::io::Write;
use std::time::Duration;

use pixmorph_image::Image;

use crate::{error::VizError, sink::FrameSink};

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[H";
const RESET: &str = "\x1b[0m";

/// Paints frames on a terminal using 24-bit ANSI background colors.
///
/// Every pixel takes two character cells and every image row one line. The
/// screen is cleared before the first frame; later frames overwrite it in place.
pub struct TerminalSink<W: Write> {
    writer: W,
    frames_painted: usize,
}

impl TerminalSink<std::io::Stdout> {
    /// Create a sink painting on the standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    /// Create a sink painting on the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frames_painted: 0,
        }
    }

    /// The number of frames painted so far.
    pub fn frames_painted(&self) -> usize {
        self.frames_painted
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn paint(&mut self, frame: &Image<u8, 3>, pacing: Duration) -> Result<(), VizError> {
        if self.frames_painted == 0 {
            write!(self.writer, "{}", CLEAR_SCREEN)?;
        }
        write!(self.writer, "{}", CURSOR_HOME)?;

        for row in frame.as_slice().chunks_exact(frame.cols() * 3) {
            for pixel in row.chunks_exact(3) {
                write!(
                    self.writer,
                    "\x1b[48;2;{};{};{}m  ",
                    pixel[0], pixel[1], pixel[2]
                )?;
            }
            writeln!(self.writer, "{}", RESET)?;
        }
        self.writer.flush()?;

        self.frames_painted += 1;
        log::debug!(
            "painted frame {} ({}x{})",
            self.frames_painted,
            frame.cols(),
            frame.rows()
        );

        if !pacing.is_zero() {
            std::thread::sleep(pacing);
        }

        Ok(())
    }
}

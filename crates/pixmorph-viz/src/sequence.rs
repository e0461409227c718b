use std::path::{Path, PathBuf};
use std::time::Duration;

use pixmorph_image::Image;
use pixmorph_io::functional::write_image_ppm;

use crate::{error::VizError, sink::FrameSink};

/// Writes every frame to `<dir>/<prefix>_<index>.ppm`, with a four digit index.
///
/// Pacing is ignored.
pub struct PpmSequenceWriter {
    dir: PathBuf,
    prefix: String,
    frames_written: usize,
}

impl PpmSequenceWriter {
    /// Create a writer, creating the output directory if needed.
    ///
    /// # Arguments
    ///
    /// * `dir` - The output directory.
    /// * `prefix` - The file name prefix of every frame.
    pub fn new(dir: impl AsRef<Path>, prefix: impl Into<String>) -> Result<Self, VizError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            prefix: prefix.into(),
            frames_written: 0,
        })
    }

    /// The path of the frame with the given index.
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}_{:04}.ppm", self.prefix, index))
    }

    /// The number of frames written so far.
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }
}

impl FrameSink for PpmSequenceWriter {
    fn paint(&mut self, frame: &Image<u8, 3>, _pacing: Duration) -> Result<(), VizError> {
        let path = self.frame_path(self.frames_written);
        write_image_ppm(&path, frame)?;
        self.frames_written += 1;
        Ok(())
    }
}

use std::path::Path;

use image::RgbImage;
use tracing::{debug, info};

use crate::boundary::Boundaries;
use crate::compare::Comparator;
use crate::contrast::scan_frame;
use crate::dimension::determine_dimension;
use crate::error::{Result, UnscaleError};
use crate::io::open_frames;

use super::config::UnscaleConfig;
use super::types::{ProgressReporter, UnscaleReport};

/// Boundary evidence for the scaled size fixed by the first frame.
struct Evidence {
    width: u32,
    height: u32,
    columns: Boundaries,
    rows: Boundaries,
}

/// Accumulates contrast evidence over any number of identically-sized
/// frames, then estimates the pre-scale resolution.
pub struct Unscaler {
    comparator: Comparator,
    max_variation: usize,
    evidence: Option<Evidence>,
    frames_scanned: usize,
}

impl Unscaler {
    /// Validates `config` before anything is scanned.
    pub fn new(config: &UnscaleConfig) -> Result<Self> {
        let comparator = config.comparator()?;
        info!(
            comparator = %comparator,
            max_variation = config.max_variation,
            "Unscaler configured"
        );
        Ok(Self {
            comparator,
            max_variation: config.max_variation as usize,
            evidence: None,
            frames_scanned: 0,
        })
    }

    /// Scaled size established by the first frame, if any.
    pub fn scaled_size(&self) -> Option<(u32, u32)> {
        self.evidence.as_ref().map(|e| (e.width, e.height))
    }

    pub fn frames_scanned(&self) -> usize {
        self.frames_scanned
    }

    /// Current column boundary array, once a frame has been scanned.
    pub fn columns(&self) -> Option<&Boundaries> {
        self.evidence.as_ref().map(|e| &e.columns)
    }

    /// Current row boundary array, once a frame has been scanned.
    pub fn rows(&self) -> Option<&Boundaries> {
        self.evidence.as_ref().map(|e| &e.rows)
    }

    /// Fold one frame in. `label` names the frame's image in errors.
    pub fn add_frame(&mut self, label: &str, frame: &RgbImage) -> Result<()> {
        let (width, height) = frame.dimensions();
        match &self.evidence {
            Some(evidence) if evidence.width != width || evidence.height != height => {
                return Err(UnscaleError::InputSizeMismatch {
                    image: label.to_string(),
                    expected_width: evidence.width,
                    expected_height: evidence.height,
                    width,
                    height,
                });
            }
            Some(_) => {}
            None if width == 0 || height == 0 => {
                return Err(UnscaleError::InvalidDimensions { width, height });
            }
            None => info!(width, height, "Scaled resolution"),
        }
        let evidence = self.evidence.get_or_insert_with(|| Evidence {
            width,
            height,
            columns: Boundaries::new(width as usize),
            rows: Boundaries::new(height as usize),
        });

        scan_frame(
            frame,
            self.comparator,
            &mut evidence.columns,
            &mut evidence.rows,
        )?;
        self.frames_scanned += 1;
        debug!(
            image = label,
            columns = evidence.columns.count(),
            rows = evidence.rows.count(),
            "Frame scanned"
        );
        Ok(())
    }

    /// Decode every frame of the image at `path` and fold it in.
    pub fn add_image(&mut self, path: &Path, reporter: &dyn ProgressReporter) -> Result<()> {
        let label = path.display().to_string();
        let mut frame_count = 0;
        for frame in open_frames(path)? {
            let frame = frame?;
            self.add_frame(&label, &frame)?;
            reporter.frame_scanned(frame_count);
            frame_count += 1;
        }
        if frame_count == 0 {
            return Err(UnscaleError::NoFrames(label));
        }
        info!(image = %label, frames = frame_count, "Image scanned");
        Ok(())
    }

    /// Estimate the original resolution from the evidence gathered so far.
    pub fn finish(self) -> Result<UnscaleReport> {
        let evidence = self.evidence.ok_or(UnscaleError::EmptyInput)?;

        let determined_width = determine_dimension(&evidence.columns, self.max_variation);

        let determined_height = determine_dimension(&evidence.rows, self.max_variation);

        let report = UnscaleReport::new(
            evidence.width,
            evidence.height,
            determined_width,
            determined_height,
            self.frames_scanned,
        );
        info!(
            width = report.determined_width,
            height = report.determined_height,
            x_scale = report.x_scale,
            y_scale = report.y_scale,
            "Determined original resolution"
        );
        Ok(report)
    }
}

/// Scan every frame of every image in `paths` and estimate the resolution
/// they had before scaling. All frames must share the first frame's size.
pub fn determine_dimensions<P: AsRef<Path>>(
    paths: &[P],
    config: &UnscaleConfig,
    reporter: &dyn ProgressReporter,
) -> Result<UnscaleReport> {
    let mut unscaler = Unscaler::new(config)?;
    let total = paths.len();
    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        reporter.begin_image(path, index, total);
        unscaler.add_image(path, reporter)?;
    }
    reporter.finish();
    unscaler.finish()
}

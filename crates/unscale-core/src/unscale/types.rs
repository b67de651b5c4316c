use std::path::Path;

use serde::Serialize;

/// Outcome of an unscaling run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnscaleReport {
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub determined_width: usize,
    pub determined_height: usize,
    pub x_scale: f64,
    pub y_scale: f64,
    pub pixel_aspect_ratio: f64,
    /// Frames folded into the boundary arrays, across all images.
    pub frames_scanned: usize,
}

impl UnscaleReport {
    /// Derive scale factors and pixel aspect ratio from the two sizes.
    pub fn new(
        scaled_width: u32,
        scaled_height: u32,
        determined_width: usize,
        determined_height: usize,
        frames_scanned: usize,
    ) -> Self {
        let x_scale = scaled_width as f64 / determined_width as f64;
        let y_scale = scaled_height as f64 / determined_height as f64;
        Self {
            scaled_width,
            scaled_height,
            determined_width,
            determined_height,
            x_scale,
            y_scale,
            pixel_aspect_ratio: x_scale / y_scale,
            frames_scanned,
        }
    }
}

/// Progress hooks for a run over several images.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter {
    /// Scanning of image `index` (of `total`) has started.
    fn begin_image(&self, _path: &Path, _index: usize, _total: usize) {}

    /// One frame of the current image has been folded in.
    fn frame_scanned(&self, _frame_index: usize) {}

    /// All images have been scanned.
    fn finish(&self) {}
}

/// Reporter that ignores all progress.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

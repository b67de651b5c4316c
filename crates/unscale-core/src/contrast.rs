use image::RgbImage;

use crate::boundary::Boundaries;
use crate::compare::Comparator;
use crate::consts::RGB_CHANNELS;
use crate::error::{Result, UnscaleError};

/// Fold one decoded frame into the column and row boundary arrays.
pub fn scan_frame(
    frame: &RgbImage,
    comparator: Comparator,
    columns: &mut Boundaries,
    rows: &mut Boundaries,
) -> Result<()> {
    let (width, height) = frame.dimensions();
    scan_pixels(
        frame.as_raw(),
        width as usize,
        height as usize,
        comparator,
        columns,
        rows,
    )
}

/// Fold a row-major RGB8 buffer of `width * height` pixels into the boundary
/// arrays. `columns` must have length `width` and `rows` length `height`.
pub fn scan_pixels(
    pixels: &[u8],
    width: usize,
    height: usize,
    comparator: Comparator,
    columns: &mut Boundaries,
    rows: &mut Boundaries,
) -> Result<()> {
    if pixels.len() != width * height * RGB_CHANNELS
        || columns.len() != width
        || rows.len() != height
    {
        return Err(UnscaleError::InvalidDimensions {
            width: width as u32,
            height: height as u32,
        });
    }
    if width == 0 || height == 0 {
        return Ok(());
    }

    scan_columns(pixels, width, comparator, columns);
    scan_rows(pixels, width, height, comparator, rows);
    Ok(())
}

/// Mark column `x` when any row has a horizontal contrast between `x - 1`
/// and `x`. Columns already marked are skipped without comparing.
fn scan_columns(pixels: &[u8], width: usize, comparator: Comparator, columns: &mut Boundaries) {
    let stride = width * RGB_CHANNELS;
    for row in pixels.chunks_exact(stride) {
        let mut left = row;
        let mut current = &row[RGB_CHANNELS..];
        for x in 1..width {
            if columns.is_marked(x) {
                left = &left[RGB_CHANNELS..];
                current = &current[RGB_CHANNELS..];
                continue;
            }
            if comparator.compare_advance(&mut left, &mut current) {
                columns.mark(x);
            }
        }
    }
}

/// Mark row `y` on the first vertical contrast found between rows `y - 1`
/// and `y`. One contrast is proof enough, so the rest of the row is skipped.
fn scan_rows(
    pixels: &[u8],
    width: usize,
    height: usize,
    comparator: Comparator,
    rows: &mut Boundaries,
) {
    let stride = width * RGB_CHANNELS;
    for y in 1..height {
        if rows.is_marked(y) {
            continue;
        }
        let mut above = &pixels[(y - 1) * stride..y * stride];
        let mut current = &pixels[y * stride..(y + 1) * stride];
        for _ in 0..width {
            if comparator.compare_advance(&mut above, &mut current) {
                rows.mark(y);
                break;
            }
        }
    }
}

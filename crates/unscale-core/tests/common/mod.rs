#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifEncoder;
use image::{DynamicImage, Frame, ImageFormat, Rgb, RgbImage};

pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// Build an image from rows of RGB pixels. All rows must have equal length.
pub fn from_rows(rows: &[Vec<[u8; 3]>]) -> RgbImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    RgbImage::from_fn(width, height, |x, y| Rgb(rows[y as usize][x as usize]))
}

/// A single-row image.
pub fn row(pixels: &[[u8; 3]]) -> RgbImage {
    from_rows(&[pixels.to_vec()])
}

/// An image where every pixel differs from each of its neighbors.
pub fn distinct_pattern(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 37 % 256) as u8, (y * 53 % 256) as u8, ((x + y) % 2 * 255) as u8])
    })
}

/// Reference nearest-neighbor upscale, sampling each target pixel's center.
pub fn nearest_neighbor_upscale(src: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (src_w, src_h) = src.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let sx = ((2 * x as u64 + 1) * src_w as u64 / (2 * width as u64)) as u32;
        let sy = ((2 * y as u64 + 1) * src_h as u64 / (2 * height as u64)) as u32;
        *src.get_pixel(sx, sy)
    })
}

/// Column or row marks as produced by scanning, for comparison in tests.
pub fn marks(pattern: &str) -> Vec<bool> {
    pattern.chars().map(|c| c == '1').collect()
}

pub fn write_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image
        .save_with_format(&path, ImageFormat::Png)
        .expect("write PNG");
    path
}

/// Write an animated GIF with one frame per image.
pub fn write_gif(dir: &Path, name: &str, frames: &[RgbImage]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create GIF");
    {
        let mut encoder = GifEncoder::new(file);
        let frames = frames
            .iter()
            .map(|f| Frame::new(DynamicImage::ImageRgb8(f.clone()).into_rgba8()));
        encoder.encode_frames(frames).expect("encode GIF frames");
    }
    path
}

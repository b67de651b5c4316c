use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::{AnimationDecoder, DynamicImage, Frames, ImageFormat, ImageReader, RgbImage};

use crate::error::Result;

/// Lazily decoded RGB8 frames of one image file.
pub type FrameIter = Box<dyn Iterator<Item = Result<RgbImage>>>;

/// Basic facts about an image file.
#[derive(Clone, Debug)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub format: Option<ImageFormat>,
    pub width: u32,
    pub height: u32,
    pub frame_count: usize,
}

/// Guess the format from the file contents, falling back to the extension.
pub fn detect_format(path: &Path) -> Result<Option<ImageFormat>> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.format())
}

/// Open an image and iterate over its frames as RGB8 buffers.
///
/// Animated GIF and APNG files yield every frame composited to the full
/// canvas. Anything else yields a single frame. Alpha is dropped.
pub fn open_frames(path: &Path) -> Result<FrameIter> {
    match detect_format(path)? {
        Some(ImageFormat::Gif) => {
            let decoder = GifDecoder::new(BufReader::new(File::open(path)?))?;
            Ok(animation_frames(decoder.into_frames()))
        }
        Some(ImageFormat::Png) => {
            let decoder = PngDecoder::new(BufReader::new(File::open(path)?))?;
            if decoder.is_apng()? {
                return Ok(animation_frames(decoder.apng()?.into_frames()));
            }
            let image = DynamicImage::from_decoder(decoder)?;
            Ok(single_frame(image))
        }
        _ => {
            let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
            Ok(single_frame(image))
        }
    }
}

/// Decode every frame of `path` to report its size and frame count.
pub fn probe(path: &Path) -> Result<ImageInfo> {
    let format = detect_format(path)?;
    let mut info = ImageInfo {
        path: path.to_path_buf(),
        format,
        width: 0,
        height: 0,
        frame_count: 0,
    };
    for frame in open_frames(path)? {
        let frame = frame?;
        if info.frame_count == 0 {
            (info.width, info.height) = frame.dimensions();
        }
        info.frame_count += 1;
    }
    Ok(info)
}

fn single_frame(image: DynamicImage) -> FrameIter {
    Box::new(std::iter::once(Ok(image.into_rgb8())))
}

fn animation_frames(frames: Frames<'static>) -> FrameIter {
    Box::new(frames.map(|frame| -> Result<RgbImage> {
        let rgba = frame?.into_buffer();
        Ok(DynamicImage::ImageRgba8(rgba).into_rgb8())
    }))
}

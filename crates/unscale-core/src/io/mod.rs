pub mod decode;

pub use decode::{open_frames, probe, FrameIter, ImageInfo};

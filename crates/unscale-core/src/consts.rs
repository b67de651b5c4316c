/// Bytes per pixel in a decoded RGB8 frame.
pub const RGB_CHANNELS: usize = 3;

/// Per-channel tolerance used when fuzzy comparison is requested without
/// an explicit value.
pub const DEFAULT_FUZZINESS: u32 = 10;

/// Largest meaningful per-channel tolerance for 8-bit channels.
pub const MAX_FUZZINESS: u32 = 255;

/// Nearest-neighbor scaling to a non-integer factor makes source pixels vary
/// by at most one scaled pixel in each dimension.
pub const DEFAULT_MAX_VARIATION: u32 = 1;

/// Significant digits used when rendering floating-point report values.
pub const REPORT_SIGNIFICANT_DIGITS: usize = 6;

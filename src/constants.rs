pub const DEFAULT_MAX_WIDTH: u32 = 400;

pub const JPEG_QUALITY: u8 = 80;
pub const JPEG_OPTIMIZE_HUFFMAN: bool = true;

/// Largest frame dimension a baseline JPEG header can describe.
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

pub const DEFAULT_INPUT_FILE: &str = "avatar.jpg";
pub const DEFAULT_OUTPUT_FILE: &str = "avatar_opt.jpg";

pub const BYTES_PER_KB: f64 = 1024.0;

// Report line prefixes
pub const ORIGINAL_SIZE_PREFIX: &str = "Original size:";
pub const RESIZED_PREFIX: &str = "Resized to";
pub const NEW_SIZE_PREFIX: &str = "New size:";
pub const REDUCTION_PREFIX: &str = "Reduction:";
pub const ERROR_PREFIX: &str = "Error:";
pub const FAILURE_PREFIX: &str = "Optimization failed:";

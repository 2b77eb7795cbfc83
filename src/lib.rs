pub mod cli;
pub mod constants;
pub mod error;
pub mod processing;
pub mod utils;

pub use error::{OptimizeError, Result};
pub use processing::{
    encode_jpeg, load_image, optimize, optimize_image, resize_to_max_width, save_jpeg,
    target_dimensions, JpegSettings, OptimizationReport, OptimizationRequest,
};
pub use utils::{calculate_reduction, format_kilobytes, validate_file_exists};

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_MAX_WIDTH, DEFAULT_OUTPUT_FILE};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "avatar-squeeze",
    about = "Shrink a single image by downscaling it and re-encoding it as JPEG",
    long_about = "avatar-squeeze reads one image, scales it down to a maximum width while keeping \
                  its aspect ratio (Lanczos filter), and writes it back as a JPEG at quality 80 \
                  with optimized Huffman tables. It prints the size before and after.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    avatar-squeeze\n  \
    avatar-squeeze photo.png photo_small.jpg\n  \
    avatar-squeeze portrait.jpg thumb.jpg -w 128"
)]
pub struct Args {
    #[arg(
        default_value = DEFAULT_INPUT_FILE,
        help = "Input image file path"
    )]
    pub input: PathBuf,

    #[arg(
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Output JPEG file path (overwritten if present)",
        long_help = "Output JPEG file path. An existing file is overwritten; \
                     the parent directory must already exist."
    )]
    pub output: PathBuf,

    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_MAX_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Maximum width in pixels",
        long_help = "Images wider than this are scaled down to exactly this width; \
                     the height follows the original aspect ratio (rounded down)."
    )]
    pub max_width: u32,

    #[arg(short, long, help = "Print diagnostic logs to stderr")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        help = "Only log errors to stderr"
    )]
    pub quiet: bool,
}

impl Args {
    /// Log level for the stderr diagnostics. The report on stdout is not
    /// affected.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Invalid maximum width: {0}. Must be at least 1")]
    InvalidMaxWidth(u32),

    #[error("Cannot resize {0}x{1} to width {2}: resulting height would be 0")]
    DegenerateResize(u32, u32, u32),

    #[error("Image too large for JPEG: {0}x{1}. Maximum allowed: {2}x{2}")]
    DimensionsTooLarge(u32, u32, u32),

    #[error("Cannot write color type {0:?} as JPEG")]
    UnsupportedColor(image::ColorType),

    #[error("JPEG encoding error: {0}")]
    JpegEncoding(String),
}

impl OptimizeError {
    /// True for the one condition reported as `Error: <path> not found`
    /// rather than as an optimization failure.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, OptimizeError::FileNotFound(_))
    }
}

impl From<jpeg_encoder::EncodingError> for OptimizeError {
    fn from(err: jpeg_encoder::EncodingError) -> Self {
        OptimizeError::JpegEncoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OptimizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_message() {
        let err = OptimizeError::FileNotFound(PathBuf::from("missing.jpg"));
        assert_eq!(err.to_string(), "missing.jpg not found");
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_other_errors_are_not_missing_input() {
        let err = OptimizeError::DegenerateResize(10_000, 1, 400);
        assert!(!err.is_missing_input());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = OptimizeError::from(io);
        assert!(!err.is_missing_input());
        assert!(err.to_string().contains("denied"));
    }
}

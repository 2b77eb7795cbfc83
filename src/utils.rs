//! Utility functions for measuring files and rendering the size report
//!
//! Every report line goes through the helpers here so the line formats live in
//! one place.

use crate::constants::{
    BYTES_PER_KB, ERROR_PREFIX, FAILURE_PREFIX, NEW_SIZE_PREFIX, ORIGINAL_SIZE_PREFIX,
    REDUCTION_PREFIX, RESIZED_PREFIX,
};
use crate::error::{OptimizeError, Result};
use std::fs;
use std::path::Path;

/// Validate that a file exists and return a descriptive error if not
///
/// # Arguments
/// * `path` - The file path to validate
///
/// # Returns
/// * `Ok(())` if file exists, `Err(OptimizeError::FileNotFound)` otherwise
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(OptimizeError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Size of the file at `path` in bytes.
pub fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Format a byte count as kilobytes with two decimals, e.g. `"12.50"`.
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_KB)
}

/// Calculate the size reduction as a percentage
///
/// # Arguments
/// * `original_size` - Original file size in bytes
/// * `new_size` - Re-encoded file size in bytes
///
/// # Returns
/// * Percentage reduction (positive means smaller, negative means the output grew).
///   An empty original yields 0.0.
pub fn calculate_reduction(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (1.0 - new_size as f64 / original_size as f64) * 100.0
}

pub fn print_original_size(bytes: u64) {
    println!("{} {} KB", ORIGINAL_SIZE_PREFIX, format_kilobytes(bytes));
}

pub fn print_resized(width: u32, height: u32) {
    println!("{} {}x{}", RESIZED_PREFIX, width, height);
}

/// Print the closing lines of a successful run: new size, then reduction.
pub fn print_size_result(original_size: u64, new_size: u64) {
    println!("{} {} KB", NEW_SIZE_PREFIX, format_kilobytes(new_size));
    println!(
        "{} {:.1}%",
        REDUCTION_PREFIX,
        calculate_reduction(original_size, new_size)
    );
}

/// Print the single line describing why a run stopped early.
pub fn print_failure(err: &OptimizeError) {
    if err.is_missing_input() {
        println!("{} {}", ERROR_PREFIX, err);
    } else {
        println!("{} {}", FAILURE_PREFIX, err);
    }
}

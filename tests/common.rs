#![allow(dead_code)]

use image::{DynamicImage, GrayImage, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Opaque RGB image with enough detail that JPEG output is not trivially tiny.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x ^ y) % 256) as u8,
        ])
    }))
}

pub fn create_png_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient_image(width, height).save(&path).unwrap();
    path
}

pub fn create_jpeg_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient_image(width, height)
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();
    path
}

pub fn create_grayscale_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    GrayImage::from_fn(width, height, |x, y| image::Luma([((x + y) % 256) as u8]))
        .save(&path)
        .unwrap();
    path
}

pub fn create_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 90, ((x + y) % 256) as u8])
    })
    .save(&path)
    .unwrap();
    path
}

pub fn create_fake_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    File::create(&path)
        .unwrap()
        .write_all(b"fake jpg data")
        .unwrap();
    path
}

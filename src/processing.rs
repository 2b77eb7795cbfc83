use crate::constants::{
    DEFAULT_MAX_WIDTH, JPEG_OPTIMIZE_HUFFMAN, JPEG_QUALITY, MAX_JPEG_DIMENSION,
};
use crate::error::{OptimizeError, Result};
use crate::utils::{
    calculate_reduction, file_size, print_failure, print_original_size, print_resized,
    print_size_result, validate_file_exists,
};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use jpeg_encoder::{ColorType, Encoder};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Encoder knobs for the single output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegSettings {
    pub quality: u8,
    pub optimize_huffman: bool,
}

impl Default for JpegSettings {
    fn default() -> Self {
        Self {
            quality: JPEG_QUALITY,
            optimize_huffman: JPEG_OPTIMIZE_HUFFMAN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub max_width: u32,
    pub jpeg: JpegSettings,
}

impl OptimizationRequest {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        max_width: u32,
    ) -> Result<Self> {
        if max_width == 0 {
            return Err(OptimizeError::InvalidMaxWidth(max_width));
        }

        Ok(Self {
            input: input.into(),
            output: output.into(),
            max_width,
            jpeg: JpegSettings::default(),
        })
    }

    /// Request using the default maximum width of 400 pixels.
    pub fn with_default_width(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            max_width: DEFAULT_MAX_WIDTH,
            jpeg: JpegSettings::default(),
        }
    }
}

/// What a successful run measured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationReport {
    pub original_size: u64,
    pub new_size: u64,
    /// Output dimensions, present only when the image was downscaled.
    pub resized_to: Option<(u32, u32)>,
}

impl OptimizationReport {
    pub fn reduction_percent(&self) -> f64 {
        calculate_reduction(self.original_size, self.new_size)
    }
}

/// Computes the downscaled size for an image, or `None` when it already fits.
///
/// The height is `floor(height * max_width / width)`, computed in integers so
/// no rounding from floating point creeps in.
///
/// # Example
/// ```
/// use avatar_squeeze::target_dimensions;
///
/// assert_eq!(target_dimensions(1200, 800, 400), Some((400, 266)));
/// assert_eq!(target_dimensions(400, 300, 400), None);
/// ```
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width {
        return None;
    }
    let new_height = u64::from(height) * u64::from(max_width) / u64::from(width);
    // new_height <= height because max_width < width
    Some((max_width, new_height as u32))
}

/// Decodes the image at `input_path`, sniffing the format from its contents.
///
/// The file handle lives only inside this call.
pub fn load_image(input_path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;

    debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded {}",
        input_path.display()
    );
    Ok(img)
}

/// Downscales `img` in place to `max_width` with a Lanczos filter when it is
/// wider than that. Returns the new dimensions if a resize happened.
pub fn resize_to_max_width(img: &mut DynamicImage, max_width: u32) -> Result<Option<(u32, u32)>> {
    let (width, height) = img.dimensions();
    let Some((new_width, new_height)) = target_dimensions(width, height, max_width) else {
        debug!(width, max_width, "image fits, skipping resize");
        return Ok(None);
    };

    if new_height == 0 {
        return Err(OptimizeError::DegenerateResize(width, height, max_width));
    }

    *img = img.resize_exact(new_width, new_height, FilterType::Lanczos3);
    Ok(Some((new_width, new_height)))
}

/// Encodes `img` as a baseline JPEG into memory.
///
/// Grayscale sources stay single-channel; everything else is written as RGB.
/// Images with an alpha channel are rejected since JPEG cannot store it.
pub fn encode_jpeg(img: &DynamicImage, settings: &JpegSettings) -> Result<Vec<u8>> {
    if img.color().has_alpha() {
        return Err(OptimizeError::UnsupportedColor(img.color()));
    }

    let (width, height) = img.dimensions();
    let too_large = || OptimizeError::DimensionsTooLarge(width, height, MAX_JPEG_DIMENSION);
    let frame_width = u16::try_from(width).map_err(|_| too_large())?;
    let frame_height = u16::try_from(height).map_err(|_| too_large())?;

    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, settings.quality);
    encoder.set_optimized_huffman_tables(settings.optimize_huffman);

    if img.color().has_color() {
        let rgb = img.to_rgb8();
        encoder.encode(rgb.as_raw(), frame_width, frame_height, ColorType::Rgb)?;
    } else {
        let luma = img.to_luma8();
        encoder.encode(luma.as_raw(), frame_width, frame_height, ColorType::Luma)?;
    }

    debug!(
        bytes = buffer.len(),
        quality = settings.quality,
        optimize_huffman = settings.optimize_huffman,
        "encoded jpeg"
    );
    Ok(buffer)
}

/// Encodes `img` and writes it to `output_path`, replacing any existing file.
/// The parent directory must already exist.
pub fn save_jpeg(img: &DynamicImage, output_path: &Path, settings: &JpegSettings) -> Result<()> {
    let bytes = encode_jpeg(img, settings)?;
    fs::write(output_path, &bytes)?;
    Ok(())
}

/// Runs the whole optimization, printing each report line as soon as its
/// value is known.
///
/// Errors are returned to the caller unprinted; a missing input is detected
/// before anything is written to stdout.
pub fn optimize_image(request: &OptimizationRequest) -> Result<OptimizationReport> {
    validate_file_exists(&request.input)?;

    let original_size = file_size(&request.input)?;
    print_original_size(original_size);

    let mut img = load_image(&request.input)?;

    let resized_to = resize_to_max_width(&mut img, request.max_width)?;
    if let Some((width, height)) = resized_to {
        print_resized(width, height);
    }

    save_jpeg(&img, &request.output, &request.jpeg)?;

    let new_size = file_size(&request.output)?;
    print_size_result(original_size, new_size);

    Ok(OptimizationReport {
        original_size,
        new_size,
        resized_to,
    })
}

/// Top-level operation: never fails. Any error is printed as a single line
/// and the caller gets `None`.
pub fn optimize(request: &OptimizationRequest) -> Option<OptimizationReport> {
    info!(
        input = %request.input.display(),
        output = %request.output.display(),
        max_width = request.max_width,
        "optimizing image"
    );
    let started = Instant::now();

    match optimize_image(request) {
        Ok(report) => {
            info!(elapsed = ?started.elapsed(), "optimization complete");
            Some(report)
        }
        Err(err) => {
            debug!(error = ?err, "optimization stopped");
            print_failure(&err);
            None
        }
    }
}

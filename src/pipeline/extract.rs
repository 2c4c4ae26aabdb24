use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::color::Color;
use crate::pipeline::generate::generate_harmonious_with;

/// Roughly how many pixels a dominant-color pass looks at.
pub const SAMPLE_TARGET: usize = 4000;

/// Pixels with alpha at or below this are treated as transparent.
pub const ALPHA_CUTOFF: u8 = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
    #[error("pixel buffer is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Read-only view over a decoded, row-major RGBA pixel buffer.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::Empty { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(BufferError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Borrow an already decoded image.
    pub fn from_image(img: &'a RgbaImage) -> Result<Self, BufferError> {
        Self::new(img.as_raw(), img.width(), img.height())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// RGBA bytes of the pixel at linear index `i`.
    fn rgba_at(&self, i: usize) -> [u8; 4] {
        let o = i * 4;
        [
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ]
    }

    /// Color at `(x, y)`, ignoring alpha. Coordinates must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let [r, g, b, _] = self.rgba_at(y as usize * self.width as usize + x as usize);
        Color::new(r, g, b)
    }
}

/// Decode an image file into RGBA8. Decode once and sample the returned
/// buffer as often as needed.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            )
        }
    })?;
    info!(
        "decoded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img.to_rgba8())
}

/// Distance between sampled pixels so that about `SAMPLE_TARGET` are read.
pub fn sample_stride(pixel_count: usize) -> usize {
    (pixel_count / SAMPLE_TARGET).max(1)
}

/// Count exact RGB matches over the sampled, opaque pixels.
///
/// Returns colors with their counts, most frequent first. Ties keep the
/// order in which the colors were first seen.
pub fn color_frequencies(pixels: &PixelBuffer<'_>) -> Vec<(Color, usize)> {
    let stride = sample_stride(pixels.pixel_count());
    let mut slots: HashMap<Color, usize> = HashMap::new();
    let mut counts: Vec<(Color, usize)> = Vec::new();

    for i in (0..pixels.pixel_count()).step_by(stride) {
        let [r, g, b, a] = pixels.rgba_at(i);
        if a <= ALPHA_CUTOFF {
            continue;
        }
        let color = Color::new(r, g, b);
        let slot = *slots.entry(color).or_insert_with(|| {
            counts.push((color, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    debug!(
        "sampled every {stride} px, {} distinct opaque colors",
        counts.len()
    );

    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent colors in the image, most frequent first.
///
/// When no opaque pixel is sampled a harmonious palette of `top_n` colors
/// is generated from `rng` instead.
pub fn extract_dominant_with<R: Rng + ?Sized>(
    pixels: &PixelBuffer<'_>,
    top_n: usize,
    rng: &mut R,
) -> Vec<Color> {
    let colors: Vec<Color> = color_frequencies(pixels)
        .into_iter()
        .take(top_n)
        .map(|(color, _)| color)
        .collect();

    if colors.is_empty() {
        info!("no opaque pixels sampled, generating a harmonious palette");
        return generate_harmonious_with(top_n, rng);
    }
    colors
}

/// [`extract_dominant_with`] using the thread RNG for the fallback.
pub fn extract_dominant(pixels: &PixelBuffer<'_>, top_n: usize) -> Vec<Color> {
    extract_dominant_with(pixels, top_n, &mut rand::thread_rng())
}

//! Raw pixel buffers and the image codec boundary
//!
//! Everything that touches the `image` crate lives here: decoding source
//! textures to interleaved 8-bit buffers and encoding composite buffers
//! back to PNG.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

use crate::error::{Error, Result};

/// An owned buffer of `width * height * channels` 8-bit samples.
///
/// Samples are interleaved per pixel in R,G,B\[,A\] order. The buffer length
/// always equals `width * height * channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Samples per pixel (1-4).
    pub channels: u8,
    /// Interleaved sample data.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create an image with every sample set to `value`.
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Self {
        Self {
            width,
            height,
            channels,
            pixels: vec![value; width as usize * height as usize * channels as usize],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }

    /// Read the pixel at `(x, y)` expanded to RGBA.
    ///
    /// Gray sources replicate their single channel to R, G and B; sources
    /// without an alpha channel read as fully opaque.
    pub fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        let p = &self.pixels[i..i + self.channels as usize];
        match self.channels {
            1 => [p[0], p[0], p[0], 255],
            2 => [p[0], p[0], p[0], p[1]],
            3 => [p[0], p[1], p[2], 255],
            _ => [p[0], p[1], p[2], p[3]],
        }
    }

    /// Write a single sample of the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, channel: usize, value: u8) {
        let i = self.offset(x, y);
        self.pixels[i + channel] = value;
    }
}

/// Decode an image file to a buffer with its native channel count.
///
/// # Errors
/// Returns [`Error::DecodeFailed`] if the file is unreadable or not a
/// supported image format.
pub fn decode(path: &Path) -> Result<RasterImage> {
    let img = image::open(path).map_err(|e| Error::DecodeFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(from_dynamic(img))
}

fn from_dynamic(img: DynamicImage) -> RasterImage {
    let (width, height, channels, pixels) = match img {
        DynamicImage::ImageLuma8(buf) => (buf.width(), buf.height(), 1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (buf.width(), buf.height(), 2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (buf.width(), buf.height(), 3, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (buf.width(), buf.height(), 4, buf.into_raw()),
        // 16-bit and float variants are flattened to 8-bit RGBA
        other => {
            let buf = other.to_rgba8();
            (buf.width(), buf.height(), 4, buf.into_raw())
        }
    };
    RasterImage {
        width,
        height,
        channels,
        pixels,
    }
}

/// Encode a buffer as a PNG file.
///
/// # Errors
/// Returns [`Error::WriteFailed`] if the file cannot be created and
/// [`Error::PngEncodeFailed`] if encoding fails.
pub fn encode_png(path: &Path, image: &RasterImage) -> Result<()> {
    let color = match image.channels {
        1 => ExtendedColorType::L8,
        2 => ExtendedColorType::La8,
        3 => ExtendedColorType::Rgb8,
        _ => ExtendedColorType::Rgba8,
    };

    let file = File::create(path).map_err(|e| Error::WriteFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let encoder = PngEncoder::new(BufWriter::new(file));
    encoder
        .write_image(&image.pixels, image.width, image.height, color)
        .map_err(|e| Error::PngEncodeFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

//! PNG export of a captured grid.
//!
//! The UI hands over an RGBA capture of the grid area; this module adds a
//! fixed margin around it and encodes the result as PNG.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// Default file name offered in the save dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "schedule.png";

/// Row-major RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(anyhow!(
                "RGBA buffer has {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Returns a copy surrounded by `padding` pixels of `background` on
    /// every side.
    pub fn with_padding(&self, padding: u32, background: [u8; 4]) -> Self {
        let width = self.width + padding * 2;
        let height = self.height + padding * 2;
        let mut pixels = background.repeat(width as usize * height as usize);

        let src_row = self.width as usize * 4;
        for y in 0..self.height as usize {
            let src = y * src_row;
            let dst = ((y + padding as usize) * width as usize + padding as usize) * 4;
            pixels[dst..dst + src_row].copy_from_slice(&self.pixels[src..src + src_row]);
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .context("Failed to write PNG header")?;
            writer
                .write_image_data(&self.pixels)
                .context("Failed to encode PNG data")?;
            writer.finish().context("Failed to finish PNG stream")?;
        }
        Ok(bytes)
    }

    pub fn export_png(&self, path: &Path) -> Result<()> {
        let bytes = self.encode_png()?;
        fs::write(path, bytes)
            .with_context(|| format!("Failed to write image to {}", path.display()))?;
        log::info!(
            "Exported {}x{} grid image to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RasterImage {
        RasterImage::from_rgba(width, height, color.repeat((width * height) as usize)).unwrap()
    }

    #[test]
    fn test_rejects_wrong_buffer_size() {
        assert!(RasterImage::from_rgba(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn test_padding_surrounds_capture() {
        let padded = solid(3, 2, RED).with_padding(20, WHITE);
        assert_eq!(padded.width(), 43);
        assert_eq!(padded.height(), 42);
        assert_eq!(padded.pixel(0, 0), Some(WHITE));
        assert_eq!(padded.pixel(19, 20), Some(WHITE));
        assert_eq!(padded.pixel(20, 20), Some(RED));
        assert_eq!(padded.pixel(22, 21), Some(RED));
        assert_eq!(padded.pixel(23, 21), Some(WHITE));
        assert_eq!(padded.pixel(22, 22), Some(WHITE));
    }

    #[test]
    fn test_encoded_png_decodes_with_same_size() {
        let bytes = solid(4, 3, RED).with_padding(2, WHITE).encode_png().unwrap();

        let decoder = png::Decoder::new(&bytes[..]);
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (8, 7));
        assert_eq!(info.color_type, png::ColorType::Rgba);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE_NAME);
        solid(1, 1, RED).export_png(&path).unwrap();
        assert!(path.exists());
    }
}

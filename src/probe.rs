//! Pixel width measurement for downloaded images.

use std::io::Cursor;

use image::ImageReader;

/// Outcome of testing image bytes against a minimum width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCheck {
    /// Decoded and at least as wide as required.
    Qualifies { width: u32 },
    /// Decoded but narrower than required.
    TooNarrow { width: u32 },
    /// Not a decodable JPEG, PNG, GIF or WebP image.
    DecodeFailed,
}

impl SizeCheck {
    pub fn qualifies(&self) -> bool {
        matches!(self, Self::Qualifies { .. })
    }
}

/// Read the pixel dimensions from the image header without decoding pixels.
pub fn image_dimensions(bytes: &[u8]) -> image::ImageResult<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}

/// Test `bytes` against `min_width`. Undecodable input never qualifies.
pub fn check_width(bytes: &[u8], min_width: u32) -> SizeCheck {
    match image_dimensions(bytes) {
        Ok((width, _)) if width >= min_width => SizeCheck::Qualifies { width },
        Ok((width, _)) => SizeCheck::TooNarrow { width },
        Err(e) => {
            tracing::debug!("Image decode failed: {e}");
            SizeCheck::DecodeFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{ImageFormat, RgbImage};

    fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        RgbImage::new(width, height).write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn png_dimensions_read() {
        let bytes = encode(1600, 8, ImageFormat::Png);
        assert_eq!(image_dimensions(&bytes).unwrap(), (1600, 8));
    }

    #[test]
    fn jpeg_dimensions_read() {
        let bytes = encode(300, 450, ImageFormat::Jpeg);
        assert_eq!(image_dimensions(&bytes).unwrap(), (300, 450));
    }

    #[test]
    fn threshold_is_inclusive() {
        let bytes = encode(900, 4, ImageFormat::Png);
        assert_eq!(check_width(&bytes, 900), SizeCheck::Qualifies { width: 900 });
        assert_eq!(check_width(&bytes, 901), SizeCheck::TooNarrow { width: 900 });
    }

    #[test]
    fn html_error_page_is_decode_failure() {
        let check = check_width(b"<!doctype html><title>404</title>", 10);
        assert_eq!(check, SizeCheck::DecodeFailed);
        assert!(!check.qualifies());
    }

    #[test]
    fn truncated_header_is_decode_failure() {
        let bytes = encode(1200, 4, ImageFormat::Png);
        assert_eq!(check_width(&bytes[..12], 10), SizeCheck::DecodeFailed);
    }

    #[test]
    fn empty_input_is_decode_failure() {
        assert_eq!(check_width(&[], 0), SizeCheck::DecodeFailed);
    }
}

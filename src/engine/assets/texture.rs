// Decoded raster images shared by every frame sliced from them

use super::{AssetError, TextureHandle};
use image::{DynamicImage, GenericImageView, RgbaImage};
use std::sync::Arc;

/// A decoded RGBA8 raster image
///
/// Pixel data sits behind an `Arc` and is never mutated once decoded, so
/// cloning an image is cheap and every region sliced from it can share it.
#[derive(Debug, Clone)]
pub struct RasterImage {
    handle: TextureHandle,
    pixels: Arc<RgbaImage>,
}

impl RasterImage {
    /// Decode an image from encoded bytes (PNG or JPEG)
    pub fn from_bytes(bytes: &[u8], label: &str) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::Decode(format!("{}: {}", label, e)))?;
        Ok(Self::from_image(&img, label))
    }

    /// Create a raster image from an already decoded image
    pub fn from_image(img: &DynamicImage, label: &str) -> Self {
        let (width, height) = img.dimensions();
        log::debug!("Decoded {} ({}x{})", label, width, height);

        Self {
            handle: TextureHandle::from_path(label),
            pixels: Arc::new(img.to_rgba8()),
        }
    }

    /// Create a solid color image (useful for testing)
    pub fn from_color(width: u32, height: u32, color: [u8; 4], label: &str) -> Self {
        Self {
            handle: TextureHandle::from_path(label),
            pixels: Arc::new(RgbaImage::from_pixel(width, height, image::Rgba(color))),
        }
    }

    /// Handle identifying the source of this image
    pub fn handle(&self) -> TextureHandle {
        self.handle
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageOutputFormat;
    use std::io::Cursor;

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(width, height));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_from_bytes_png() {
        let bytes = encode_png(128, 64);
        let image = RasterImage::from_bytes(&bytes, "walk.png").unwrap();

        assert_eq!(image.width(), 128);
        assert_eq!(image.height(), 64);
        assert_eq!(image.handle(), TextureHandle::from_path("walk.png"));
    }

    #[test]
    fn test_from_bytes_garbage_is_decode_error() {
        let result = RasterImage::from_bytes(b"definitely not a png", "broken.png");
        assert!(matches!(result, Err(AssetError::Decode(_))));
    }

    #[test]
    fn test_from_color() {
        let image = RasterImage::from_color(4, 2, [255, 0, 0, 255], "red");
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixels.get_pixel(3, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_clone_shares_pixels() {
        let image = RasterImage::from_color(2, 2, [0, 0, 0, 0], "shared");
        let copy = image.clone();
        assert!(Arc::ptr_eq(&image.pixels, &copy.pixels));
    }
}

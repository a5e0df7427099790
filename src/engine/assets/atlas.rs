// Texture regions: rectangular views into a raster image

use super::TextureHandle;
use glam::Vec2;

/// A rectangular sub-view over a raster image, one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureRegion {
    /// Texture this region reads from
    pub texture: TextureHandle,

    /// Position in the texture (pixels)
    pub x: u32,
    pub y: u32,

    /// Size of the region (pixels)
    pub width: u32,
    pub height: u32,

    /// UV coordinates (0.0 to 1.0)
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

impl TextureRegion {
    /// Create a new region with UV coordinates calculated from the texture size
    pub fn new(
        texture: TextureHandle,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        texture_width: u32,
        texture_height: u32,
    ) -> Self {
        let uv_min = Vec2::new(
            x as f32 / texture_width as f32,
            y as f32 / texture_height as f32,
        );
        let uv_max = Vec2::new(
            (x + width) as f32 / texture_width as f32,
            (y + height) as f32 / texture_height as f32,
        );

        Self {
            texture,
            x,
            y,
            width,
            height,
            uv_min,
            uv_max,
        }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Check whether the region lies fully inside a texture of the given size
    pub fn fits_within(&self, texture_width: u32, texture_height: u32) -> bool {
        self.right() <= texture_width && self.bottom() <= texture_height
    }
}

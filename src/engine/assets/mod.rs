// Asset loading for character spritesheets
//
// Resolves spritesheet paths, decodes raster images and describes the
// regions animation frames are cut from.

mod atlas;
mod handle;
mod loader;
mod provider;
mod texture;

pub use atlas::TextureRegion;
pub use handle::{AssetHandle, AssetId, TextureAsset, TextureHandle};
pub use loader::AssetLoader;
pub use provider::{AssetProvider, FileAssetProvider, MemoryAssetProvider};
pub use texture::RasterImage;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode asset: {0}")]
    Decode(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

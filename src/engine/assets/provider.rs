// Asynchronous image providers

use super::{AssetError, AssetLoader, RasterImage};
use std::collections::HashMap;
use std::path::Path;

/// Source of decoded raster images
///
/// Each call is independent, so a caller may have several loads in flight.
#[allow(async_fn_in_trait)]
pub trait AssetProvider {
    /// Load and decode the image stored at `path`
    async fn load(&self, path: &str) -> Result<RasterImage, AssetError>;
}

/// Provider reading images from the filesystem
pub struct FileAssetProvider {
    loader: AssetLoader,
}

impl FileAssetProvider {
    /// Create a provider resolving paths against `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            loader: AssetLoader::new(root),
        }
    }
}

impl AssetProvider for FileAssetProvider {
    async fn load(&self, path: &str) -> Result<RasterImage, AssetError> {
        let bytes = self.loader.load_bytes(path)?;
        RasterImage::from_bytes(&bytes, path)
    }
}

/// Provider serving images that are already in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryAssetProvider {
    images: HashMap<String, RasterImage>,
}

impl MemoryAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under a path
    pub fn insert(&mut self, path: impl Into<String>, image: RasterImage) {
        self.images.insert(path.into(), image);
    }

    /// Register an image and return the provider (builder style)
    pub fn with_image(mut self, path: impl Into<String>, image: RasterImage) -> Self {
        self.insert(path, image);
        self
    }
}

impl AssetProvider for MemoryAssetProvider {
    async fn load(&self, path: &str) -> Result<RasterImage, AssetError> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

// Asset file resolution and reading

use super::AssetError;
use std::path::{Path, PathBuf};

/// Asset loader responsible for finding and reading asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Supported image file extensions
    pub const IMAGE_EXTENSIONS: &'static [&'static str] = &["png", "jpg", "jpeg"];

    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        std::fs::read(&path)
            .map_err(|e| AssetError::LoadError(format!("Failed to read {}: {}", name, e)))
    }

    /// List the image files directly under `dir` (relative to the base path)
    pub fn list_images(&self, dir: &str) -> Result<Vec<String>, AssetError> {
        let dir = self.base_path.join(dir);

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut images = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();

            if !path.is_file() {
                continue;
            }

            let is_image = path
                .extension()
                .map(|ext| Self::IMAGE_EXTENSIONS.contains(&ext.to_string_lossy().as_ref()))
                .unwrap_or(false);

            if let (true, Some(name)) = (is_image, path.file_name()) {
                images.push(name.to_string_lossy().to_string());
            }
        }

        images.sort();
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "directional-sprites-loader-{}-{}",
            tag,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path("characters/walk.png");

        assert_eq!(path, PathBuf::from("/game/assets/characters/walk.png"));
    }

    #[test]
    fn test_load_missing_file() {
        let loader = AssetLoader::new(temp_dir("missing"));
        let result = loader.load_bytes("nonexistent.png");

        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_load_and_list() {
        let dir = temp_dir("list");
        std::fs::write(dir.join("walk.png"), b"png").unwrap();
        std::fs::write(dir.join("idle.png"), b"png").unwrap();
        std::fs::write(dir.join("notes.txt"), b"text").unwrap();

        let loader = AssetLoader::new(&dir);
        assert_eq!(loader.load_bytes("walk.png").unwrap(), b"png");
        assert_eq!(loader.list_images("").unwrap(), vec!["idle.png", "walk.png"]);
        assert!(loader.list_images("missing").unwrap().is_empty());

        std::fs::remove_dir_all(dir).unwrap();
    }
}

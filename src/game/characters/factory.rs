// Loading a character's animations from spritesheets

use super::animation::AnimationConfig;
use super::character::AnimatedCharacter;
use super::spritesheet::SheetLayout;
use super::AnimationError;
use crate::engine::assets::{AssetProvider, RasterImage};
use crate::engine::renderer::SpriteHost;
use futures::future::join_all;
use log::{info, warn};

/// An animation that could not be loaded
#[derive(Debug)]
pub struct LoadFailure {
    pub name: String,
    pub reason: AnimationError,
}

/// Outcome of loading a batch of animations
#[derive(Debug, Default)]
pub struct LoadResult {
    /// Animations that were registered, in configuration order
    pub succeeded: Vec<String>,
    /// Animations that failed, in configuration order
    pub failed: Vec<LoadFailure>,
    /// Number of animations requested
    pub total: usize,
}

impl LoadResult {
    /// Check whether every requested animation loaded
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Names of the animations that failed
    pub fn failed_names(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Build a character from one spritesheet per animation
///
/// The sheet for `name` is loaded from `{base_path}{name}.png`. See
/// [`load_animations`] for how failures are handled.
pub async fn create_with_animations<H, P, I, S>(
    host: H,
    provider: &P,
    configs: I,
    layout: &SheetLayout,
    base_path: &str,
) -> (AnimatedCharacter<H>, LoadResult)
where
    H: SpriteHost,
    P: AssetProvider,
    I: IntoIterator<Item = (S, AnimationConfig)>,
    S: Into<String>,
{
    let mut character = AnimatedCharacter::new(host);
    let result = load_animations(&mut character, provider, configs, layout, base_path).await;
    (character, result)
}

/// Load spritesheets concurrently and register them on an existing character
///
/// A failing animation is recorded in the result and never stops the others.
/// Sheets are registered in configuration order, so the first configured
/// animation that loads becomes the starting one on a fresh character.
pub async fn load_animations<H, P, I, S>(
    character: &mut AnimatedCharacter<H>,
    provider: &P,
    configs: I,
    layout: &SheetLayout,
    base_path: &str,
) -> LoadResult
where
    H: SpriteHost,
    P: AssetProvider,
    I: IntoIterator<Item = (S, AnimationConfig)>,
    S: Into<String>,
{
    let configs: Vec<(String, AnimationConfig)> = configs
        .into_iter()
        .map(|(name, config)| (name.into(), config))
        .collect();

    let loads = configs.iter().map(|(name, _)| {
        let path = format!("{}{}.png", base_path, name);
        async move { provider.load(&path).await }
    });
    let images = join_all(loads).await;

    let mut result = LoadResult {
        total: configs.len(),
        ..Default::default()
    };

    for ((name, config), image) in configs.into_iter().zip(images) {
        let registered = image
            .map_err(AnimationError::from)
            .and_then(|image| register(character, &name, &image, config, layout));

        match registered {
            Ok(()) => result.succeeded.push(name),
            Err(reason) => {
                warn!("Failed to load animation {}: {}", name, reason);
                result.failed.push(LoadFailure { name, reason });
            }
        }
    }

    info!(
        "Loaded {}/{} animations{}",
        result.succeeded.len(),
        result.total,
        if result.is_complete() {
            String::new()
        } else {
            format!(" (failed: {})", result.failed_names().join(", "))
        }
    );

    result
}

fn register<H: SpriteHost>(
    character: &mut AnimatedCharacter<H>,
    name: &str,
    image: &RasterImage,
    config: AnimationConfig,
    layout: &SheetLayout,
) -> Result<(), AnimationError> {
    let sheet = layout.slice(image)?;
    character.add_animation(name, sheet.frames, sheet.frame_count, config.speed)
}

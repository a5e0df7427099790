// Character animation system
//
// This module contains everything related to animated characters:
// - Facing directions and spritesheet slicing
// - Animation registry entries
// - The controller that swaps animations while keeping the playhead
// - Loading a character's animations from spritesheets

pub mod animation;
pub mod character;
pub mod direction;
pub mod factory;
pub mod settings;
pub mod spritesheet;

// Re-export commonly used types
pub use animation::{AnimationConfig, AnimationEntry, FrameMapping};
pub use character::AnimatedCharacter;
pub use direction::{Direction, DirectionParseError};
pub use factory::{create_with_animations, load_animations, LoadFailure, LoadResult};
pub use settings::{CharacterSettings, DEFAULT_SETTINGS};
pub use spritesheet::{slice_spritesheet, SheetLayout, SliceError, SlicedSheet};

use crate::engine::assets::AssetError;
use crate::engine::renderer::SpriteError;

/// Errors raised while registering or switching animations
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Unknown animation: {0}")]
    UnknownAnimation(String),

    #[error("Animation {0} has no frames")]
    EmptyAnimation(String),

    #[error("Animation {name}: direction {direction} has {actual} frames, expected {expected}")]
    FrameCountMismatch {
        name: String,
        direction: Direction,
        expected: usize,
        actual: usize,
    },

    #[error("Animation {name}: invalid playback speed {speed}")]
    InvalidSpeed { name: String, speed: f32 },

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Slice(#[from] SliceError),

    #[error(transparent)]
    Sprite(#[from] SpriteError),
}

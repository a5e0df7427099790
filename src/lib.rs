//! Directional, multi-animation sprite playback for 2D characters.
//!
//! Spritesheets are sliced into per-direction frame sequences and registered
//! as named animations on an [`AnimatedCharacter`]. Switching animation or
//! direction keeps the displayed frame where it was whenever the new sequence
//! allows it, and falls back to an available direction when the requested one
//! is missing.

pub mod core;
pub mod engine;
pub mod game;

pub use engine::assets::{
    AssetError, AssetProvider, FileAssetProvider, MemoryAssetProvider, RasterImage, TextureRegion,
};
pub use engine::renderer::{HeadlessSprite, SpriteError, SpriteHost};
pub use game::characters::{
    create_with_animations, slice_spritesheet, AnimatedCharacter, AnimationConfig,
    AnimationEntry, AnimationError, CharacterSettings, Direction, FrameMapping, LoadResult,
    SheetLayout,
};

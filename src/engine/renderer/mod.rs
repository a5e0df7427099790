// Sprite hosts that display animation frames

mod sprite;

pub use sprite::{FrameSequence, HeadlessSprite, SpriteError, SpriteHost};

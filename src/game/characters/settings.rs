// Character presentation settings applied when a controller is created

use super::Direction;
use glam::Vec2;

/// Settings for a newly created animated character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterSettings {
    /// Locomotion speed (world units per tick), stored for movement code
    pub move_speed: f32,
    /// Uniform sprite scale
    pub scale: f32,
    /// Sprite origin relative to its size
    pub anchor: Vec2,
    /// Direction the character faces before any input
    pub initial_direction: Direction,
}

/// Defaults: centered, unscaled, facing the camera
pub const DEFAULT_SETTINGS: CharacterSettings = CharacterSettings {
    move_speed: 2.0,
    scale: 1.0,
    anchor: Vec2::new(0.5, 0.5),
    initial_direction: Direction::Down,
};

impl Default for CharacterSettings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

impl CharacterSettings {
    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_initial_direction(mut self, direction: Direction) -> Self {
        self.initial_direction = direction;
        self
    }
}

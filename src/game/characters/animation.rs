// Animation registry entries and per-direction frame sequences

use super::{AnimationError, Direction};
use crate::engine::assets::TextureRegion;
use crate::engine::renderer::FrameSequence;

/// Per-direction frame sequences of one animation, in insertion order
///
/// A direction is never stored with an empty sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameMapping {
    sequences: Vec<(Direction, FrameSequence)>,
}

impl FrameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the frames for a direction
    ///
    /// Replacing an existing direction keeps its position in the order.
    /// Returns false (and stores nothing) when `frames` is empty.
    pub fn insert(&mut self, direction: Direction, frames: Vec<TextureRegion>) -> bool {
        if frames.is_empty() {
            return false;
        }

        let frames: FrameSequence = frames.into();
        match self.sequences.iter_mut().find(|(d, _)| *d == direction) {
            Some((_, existing)) => *existing = frames,
            None => self.sequences.push((direction, frames)),
        }
        true
    }

    /// Get the frames for a direction
    pub fn get(&self, direction: Direction) -> Option<&FrameSequence> {
        self.sequences
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, frames)| frames)
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.get(direction).is_some()
    }

    /// Directions in insertion order
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.sequences.iter().map(|(d, _)| *d)
    }

    /// Iterate over (direction, frames) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &FrameSequence)> + '_ {
        self.sequences.iter().map(|(d, frames)| (*d, frames))
    }

    /// Resolve a requested direction to one this mapping actually has
    ///
    /// Falls back to the first inserted direction when `requested` is missing.
    pub fn resolve(&self, requested: Direction) -> Option<Direction> {
        if self.contains(requested) {
            Some(requested)
        } else {
            self.sequences.first().map(|(d, _)| *d)
        }
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// A registered, immutable animation
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationEntry {
    frames: FrameMapping,
    frame_count: usize,
    speed: f32,
}

impl AnimationEntry {
    /// Validate and build an entry
    ///
    /// Every direction must hold exactly `frame_count` frames and the speed
    /// must be a positive, finite number of frames per host tick.
    pub fn new(
        name: &str,
        frames: FrameMapping,
        frame_count: usize,
        speed: f32,
    ) -> Result<Self, AnimationError> {
        if frame_count == 0 || frames.is_empty() {
            return Err(AnimationError::EmptyAnimation(name.to_string()));
        }

        if !speed.is_finite() || speed <= 0.0 {
            return Err(AnimationError::InvalidSpeed {
                name: name.to_string(),
                speed,
            });
        }

        if let Some((direction, sequence)) = frames.iter().find(|(_, f)| f.len() != frame_count) {
            return Err(AnimationError::FrameCountMismatch {
                name: name.to_string(),
                direction,
                expected: frame_count,
                actual: sequence.len(),
            });
        }

        Ok(Self {
            frames,
            frame_count,
            speed,
        })
    }

    pub fn frames(&self) -> &FrameMapping {
        &self.frames
    }

    /// Number of frames in every direction's sequence
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Playback speed in frames per host tick
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Directions this animation has, in insertion order
    pub fn directions(&self) -> Vec<Direction> {
        self.frames.directions().collect()
    }
}

/// Per-animation settings used when loading a character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Playback speed in frames per host tick
    pub speed: f32,
}

impl AnimationConfig {
    pub const DEFAULT_SPEED: f32 = 0.15;

    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::TextureHandle;

    fn frames(count: u32) -> Vec<TextureRegion> {
        let texture = TextureHandle::from_path("test.png");
        (0..count)
            .map(|i| TextureRegion::new(texture, i * 16, 0, 16, 16, count * 16, 16))
            .collect()
    }

    #[test]
    fn test_mapping_skips_empty_sequences() {
        let mut mapping = FrameMapping::new();
        assert!(!mapping.insert(Direction::Up, Vec::new()));
        assert!(mapping.is_empty());
        assert!(!mapping.contains(Direction::Up));
    }

    #[test]
    fn test_mapping_keeps_insertion_order() {
        let mut mapping = FrameMapping::new();
        mapping.insert(Direction::Right, frames(2));
        mapping.insert(Direction::Up, frames(2));
        mapping.insert(Direction::Down, frames(2));

        let order: Vec<_> = mapping.directions().collect();
        assert_eq!(order, vec![Direction::Right, Direction::Up, Direction::Down]);

        // Replacing keeps the original slot
        mapping.insert(Direction::Right, frames(3));
        assert_eq!(mapping.directions().next(), Some(Direction::Right));
        assert_eq!(mapping.get(Direction::Right).map(|f| f.len()), Some(3));
        assert_eq!(mapping.len(), 3);
    }

    #[test]
    fn test_mapping_resolve_falls_back_to_first() {
        let mut mapping = FrameMapping::new();
        mapping.insert(Direction::Down, frames(1));
        mapping.insert(Direction::Left, frames(1));

        assert_eq!(mapping.resolve(Direction::Left), Some(Direction::Left));
        assert_eq!(mapping.resolve(Direction::Up), Some(Direction::Down));
        assert_eq!(FrameMapping::new().resolve(Direction::Up), None);
    }

    #[test]
    fn test_entry_creation() {
        let mut mapping = FrameMapping::new();
        mapping.insert(Direction::Down, frames(4));
        mapping.insert(Direction::Up, frames(4));

        let entry = AnimationEntry::new("walk", mapping, 4, 0.2).unwrap();
        assert_eq!(entry.frame_count(), 4);
        assert_eq!(entry.speed(), 0.2);
        assert_eq!(entry.directions(), vec![Direction::Down, Direction::Up]);
    }

    #[test]
    fn test_entry_rejects_empty() {
        let result = AnimationEntry::new("idle", FrameMapping::new(), 4, 0.2);
        assert!(matches!(result, Err(AnimationError::EmptyAnimation(name)) if name == "idle"));

        let mut mapping = FrameMapping::new();
        mapping.insert(Direction::Down, frames(4));
        let result = AnimationEntry::new("idle", mapping, 0, 0.2);
        assert!(matches!(result, Err(AnimationError::EmptyAnimation(_))));
    }

    #[test]
    fn test_entry_rejects_mismatched_lengths() {
        let mut mapping = FrameMapping::new();
        mapping.insert(Direction::Down, frames(4));
        mapping.insert(Direction::Left, frames(3));

        let result = AnimationEntry::new("walk", mapping, 4, 0.2);
        assert!(matches!(
            result,
            Err(AnimationError::FrameCountMismatch {
                direction: Direction::Left,
                expected: 4,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_entry_rejects_bad_speed() {
        for speed in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mut mapping = FrameMapping::new();
            mapping.insert(Direction::Down, frames(2));
            let result = AnimationEntry::new("walk", mapping, 2, speed);
            assert!(matches!(result, Err(AnimationError::InvalidSpeed { .. })));
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = AnimationConfig::default();
        assert_eq!(config.speed, AnimationConfig::DEFAULT_SPEED);
        assert_eq!(config.with_speed(0.5).speed, 0.5);
    }
}

// Animated sprite hosts: the display side of character animation

use crate::core::math::clamp_frame;
use crate::engine::assets::TextureRegion;
use glam::Vec2;
use std::sync::Arc;

/// Shared, immutable frame sequence handed to a sprite host
pub type FrameSequence = Arc<[TextureRegion]>;

/// Errors reported by a sprite host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpriteError {
    #[error("Frame sequence is empty")]
    EmptySequence,
}

/// A display node that steps through a frame sequence on its own clock
///
/// Replacing the frame sequence may reset playback; callers that want to keep
/// the playhead must read `current_frame`/`is_playing` first and seek after.
pub trait SpriteHost {
    /// Replace the active frame sequence
    fn set_frames(&mut self, frames: FrameSequence) -> Result<(), SpriteError>;

    /// Set playback speed in frames per tick
    fn set_animation_speed(&mut self, speed: f32);

    fn is_playing(&self) -> bool;

    /// Index of the currently displayed frame
    fn current_frame(&self) -> usize;

    /// Seek to a frame and keep playing from there
    fn goto_and_play(&mut self, frame: usize);

    /// Seek to a frame and hold it
    fn goto_and_stop(&mut self, frame: usize);

    fn play(&mut self);

    fn stop(&mut self);

    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    fn set_anchor(&mut self, anchor: Vec2);

    fn set_scale(&mut self, scale: Vec2);

    fn set_position(&mut self, position: Vec2);
}

/// A sprite host without a renderer, advanced by calling `update`
#[derive(Debug, Clone)]
pub struct HeadlessSprite {
    /// Position in world space
    pub position: Vec2,
    /// Scale (1.0 = original size)
    pub scale: Vec2,
    /// Origin of the sprite relative to its size (0.5 = centered)
    pub anchor: Vec2,
    visible: bool,
    frames: FrameSequence,
    current_frame: usize,
    /// Fractional progress towards the next frame
    frame_timer: f32,
    playing: bool,
    animation_speed: f32,
    looping: bool,
    /// Number of times the frame sequence was replaced
    sequence_swaps: usize,
}

impl Default for HeadlessSprite {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSprite {
    /// Create an empty, hidden sprite
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            anchor: Vec2::ZERO,
            visible: false,
            frames: Vec::new().into(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: false,
            animation_speed: 1.0,
            looping: true,
            sequence_swaps: 0,
        }
    }

    /// Set whether playback wraps around or holds the last frame
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Advance the playhead by `ticks` host ticks
    ///
    /// Negative and non-finite tick counts are ignored.
    pub fn update(&mut self, ticks: f32) {
        if !self.playing || self.frames.is_empty() || !ticks.is_finite() || ticks <= 0.0 {
            return;
        }

        self.frame_timer = (self.frame_timer + ticks * self.animation_speed).min(f32::MAX);

        let steps = self.frame_timer.floor();
        self.frame_timer -= steps;
        if steps < 1.0 {
            return;
        }

        // Saturating cast; whole loops are dropped below anyway
        let steps = steps as u64;
        let len = self.frames.len() as u64;
        let current = self.current_frame as u64;

        if self.looping {
            self.current_frame = ((current + steps % len) % len) as usize;
        } else if current.saturating_add(steps) >= len {
            // Stay on last frame
            self.current_frame = self.frames.len() - 1;
            self.playing = false;
            self.frame_timer = 0.0;
        } else {
            self.current_frame = (current + steps) as usize;
        }
    }

    /// Currently displayed region, if any frames are set
    pub fn current_region(&self) -> Option<&TextureRegion> {
        self.frames.get(self.current_frame)
    }

    pub fn animation_speed(&self) -> f32 {
        self.animation_speed
    }

    /// Number of times the frame sequence has been replaced
    pub fn sequence_swaps(&self) -> usize {
        self.sequence_swaps
    }

    fn seek(&mut self, frame: usize) {
        self.current_frame = clamp_frame(frame, self.frames.len());
        self.frame_timer = 0.0;
    }
}

impl SpriteHost for HeadlessSprite {
    fn set_frames(&mut self, frames: FrameSequence) -> Result<(), SpriteError> {
        if frames.is_empty() {
            return Err(SpriteError::EmptySequence);
        }

        self.frames = frames;
        self.sequence_swaps += 1;
        // A new sequence starts stopped on its first frame
        self.playing = false;
        self.seek(0);
        Ok(())
    }

    fn set_animation_speed(&mut self, speed: f32) {
        self.animation_speed = speed.max(0.0);
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn current_frame(&self) -> usize {
        self.current_frame
    }

    fn goto_and_play(&mut self, frame: usize) {
        self.seek(frame);
        self.playing = true;
    }

    fn goto_and_stop(&mut self, frame: usize) {
        self.seek(frame);
        self.playing = false;
    }

    fn play(&mut self) {
        self.playing = true;
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

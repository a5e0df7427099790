// Animated character controller

use super::animation::{AnimationEntry, FrameMapping};
use super::settings::CharacterSettings;
use super::{AnimationError, Direction};
use crate::core::math::clamp_frame;
use crate::engine::renderer::{FrameSequence, HeadlessSprite, SpriteHost};
use glam::Vec2;
use log::{debug, warn};
use std::collections::BTreeMap;

/// A character that plays named, directional animations on a sprite host
///
/// Switching animation or direction keeps the playhead where it was (clamped
/// to the new sequence) and keeps the play/pause state. Once an animation is
/// active, the current direction is always one the active animation has.
#[derive(Debug)]
pub struct AnimatedCharacter<H: SpriteHost = HeadlessSprite> {
    /// Sprite the frames are displayed on
    host: H,
    /// All registered animations by name
    animations: BTreeMap<String, AnimationEntry>,
    /// Currently displayed animation (None until one is registered)
    current_animation: Option<String>,
    /// Currently displayed direction
    current_direction: Direction,
    /// Locomotion speed, kept for movement code
    move_speed: f32,
}

impl Default for AnimatedCharacter<HeadlessSprite> {
    fn default() -> Self {
        Self::new(HeadlessSprite::new())
    }
}

impl<H: SpriteHost> AnimatedCharacter<H> {
    /// Create a character with default settings
    pub fn new(host: H) -> Self {
        Self::with_settings(host, CharacterSettings::default())
    }

    /// Create a character; the host stays hidden until an animation is added
    pub fn with_settings(mut host: H, settings: CharacterSettings) -> Self {
        host.set_visible(false);
        host.set_anchor(settings.anchor);
        host.set_scale(Vec2::splat(settings.scale));

        Self {
            host,
            animations: BTreeMap::new(),
            current_animation: None,
            current_direction: settings.initial_direction,
            move_speed: settings.move_speed,
        }
    }

    /// Register (or replace) an animation
    ///
    /// The first animation ever registered becomes visible and active
    /// immediately, and starts playing. Replacing the active animation
    /// re-applies it to the host. If the host rejects the frames, nothing is
    /// registered and the character is left as it was.
    pub fn add_animation(
        &mut self,
        name: &str,
        frames: FrameMapping,
        frame_count: usize,
        speed: f32,
    ) -> Result<(), AnimationError> {
        let entry = AnimationEntry::new(name, frames, frame_count, speed)?;

        let first = self.current_animation.is_none();
        let is_current = self.current_animation.as_deref() == Some(name);
        if first || is_current {
            let (direction, sequence) = resolve_frames(name, &entry, self.current_direction)?;
            self.show(name, direction, sequence, entry.speed())?;
            if first {
                self.host.set_visible(true);
            }
        }

        debug!(
            "Registered animation {} ({} frames, directions {:?})",
            name,
            frame_count,
            entry.directions()
        );
        self.animations.insert(name.to_string(), entry);
        Ok(())
    }

    /// Switch to an animation, optionally changing direction
    ///
    /// `None` keeps the current direction. A direction the animation lacks
    /// falls back to its first direction. Switching to what is already shown
    /// does nothing, so repeated calls never restart the animation.
    pub fn change_animation(
        &mut self,
        name: &str,
        direction: Option<Direction>,
    ) -> Result<(), AnimationError> {
        let Some(entry) = self.animations.get(name) else {
            warn!("Unknown animation: {}", name);
            return Err(AnimationError::UnknownAnimation(name.to_string()));
        };

        let requested = direction.unwrap_or(self.current_direction);
        let (resolved, sequence) = resolve_frames(name, entry, requested)?;
        let speed = entry.speed();

        if self.current_animation.as_deref() == Some(name) && self.current_direction == resolved {
            return Ok(());
        }

        self.show(name, resolved, sequence, speed)
    }

    /// Face another direction within the current animation
    ///
    /// Does nothing until an animation is active.
    pub fn change_direction(&mut self, direction: Direction) -> Result<(), AnimationError> {
        match self.current_animation.clone() {
            Some(name) => self.change_animation(&name, Some(direction)),
            None => Ok(()),
        }
    }

    /// Put a frame sequence on the host, keeping the playhead, then commit it
    fn show(
        &mut self,
        name: &str,
        direction: Direction,
        sequence: FrameSequence,
        speed: f32,
    ) -> Result<(), AnimationError> {
        // Capture the playhead before the host resets it. The very first
        // activation is the exception: the host has shown nothing yet, so its
        // stopped flag is not kept and playback starts.
        let was_playing = self.current_animation.is_none() || self.host.is_playing();
        let frame = self.host.current_frame();

        let len = sequence.len();
        self.host.set_frames(sequence)?;
        self.host.set_animation_speed(speed);

        let target = clamp_frame(frame, len);
        if was_playing {
            self.host.goto_and_play(target);
        } else {
            self.host.goto_and_stop(target);
        }

        debug!(
            "Switched to {} facing {} at frame {}{}",
            name,
            direction,
            target,
            if was_playing { "" } else { " (paused)" }
        );

        self.current_animation = Some(name.to_string());
        self.current_direction = direction;
        Ok(())
    }

    /// Set a uniform sprite scale
    pub fn set_scale(&mut self, scale: f32) {
        self.host.set_scale(Vec2::splat(scale));
    }

    /// Set the sprite origin relative to its size
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.host.set_anchor(anchor);
    }

    /// Move the sprite
    pub fn set_position(&mut self, position: Vec2) {
        self.host.set_position(position);
    }

    /// Pause playback on the current frame
    pub fn pause(&mut self) {
        self.host.stop();
    }

    /// Resume playback
    pub fn play(&mut self) {
        self.host.play();
    }

    /// Names of all registered animations, sorted
    pub fn available_animations(&self) -> Vec<String> {
        self.animations.keys().cloned().collect()
    }

    /// Directions an animation has, in row order; empty if it is unknown
    pub fn available_directions(&self, name: &str) -> Vec<Direction> {
        match self.animations.get(name) {
            Some(entry) => entry.directions(),
            None => {
                warn!("Unknown animation: {}", name);
                Vec::new()
            }
        }
    }

    /// Get a registered animation
    pub fn animation(&self, name: &str) -> Option<&AnimationEntry> {
        self.animations.get(name)
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> Option<&str> {
        self.current_animation.as_deref()
    }

    /// Get the current facing direction
    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn set_move_speed(&mut self, move_speed: f32) {
        self.move_speed = move_speed;
    }

    /// Get the sprite host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get the sprite host mutably (e.g. to advance its clock)
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

/// Resolve the direction to show and its frames, falling back when missing
fn resolve_frames(
    name: &str,
    entry: &AnimationEntry,
    requested: Direction,
) -> Result<(Direction, FrameSequence), AnimationError> {
    let resolved = entry
        .frames()
        .resolve(requested)
        .ok_or_else(|| AnimationError::EmptyAnimation(name.to_string()))?;
    if resolved != requested {
        debug!(
            "Animation {} has no {} frames, using {}",
            name, requested, resolved
        );
    }

    let sequence = entry
        .frames()
        .get(resolved)
        .cloned()
        .ok_or_else(|| AnimationError::EmptyAnimation(name.to_string()))?;
    Ok((resolved, sequence))
}

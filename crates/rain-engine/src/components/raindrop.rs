//! A single falling raindrop.

use glam::Vec2;
use crate::core::geometry::Rect;
use crate::core::platform::Platforms;
use crate::core::rng::Rng;
use super::color::Color;
use super::emitter::RainEmitter;

#[derive(Debug, Clone)]
pub struct Raindrop {
    /// Top-left corner of the drop's bounds.
    pub position: Vec2,
    /// Width. Height is `2 * size`.
    pub size: f32,
    /// Only `y` ever changes; drops never drift sideways.
    pub velocity: Vec2,
    pub tint: Color,
}

impl Raindrop {
    pub fn new(position: Vec2, size: f32, tint: Color) -> Self {
        Raindrop {
            position,
            size,
            velocity: Vec2::ZERO,
            tint,
        }
    }

    /// Create a drop at a random x in [0, viewport width) just above the top edge.
    pub fn spawn(rng: &mut Rng, viewport: Vec2, emitter: &RainEmitter) -> Self {
        let size = rng.range(emitter.size_range.0, emitter.size_range.1);
        let x = rng.range(0.0, viewport.x);
        let y = rng.range(emitter.spawn_y_range.0, emitter.spawn_y_range.1);
        Self::new(Vec2::new(x, y), size, emitter.tint)
    }

    /// Semi-implicit Euler step under gravity.
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        self.velocity.y += gravity * dt;
        self.position += self.velocity * dt;
    }

    /// Below the bottom edge. Drops can't leave sideways, so no other edge is checked.
    pub fn is_off_screen(&self, viewport: Vec2) -> bool {
        self.position.y > viewport.y
    }

    pub fn is_on_platform(&self, platforms: &Platforms) -> bool {
        platforms.any_intersects(&self.bounds())
    }

    pub fn dimensions(&self) -> Vec2 {
        Vec2::new(self.size, self.size * 2.0)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.position, self.dimensions())
    }

    /// Wetness contributed per frame of contact.
    pub fn area(&self) -> f32 {
        self.size * self.size * 2.0
    }
}

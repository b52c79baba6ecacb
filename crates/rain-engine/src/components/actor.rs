use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::core::geometry::Rect;
use super::color::{Color, WetnessPalette};

/// Within this distance of the target the actor snaps onto it and stops.
pub const ARRIVAL_DISTANCE: f32 = 5.0;

/// Actor sizing and movement speeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Width / height of the actor's bounds.
    pub size: Vec2,
    /// Distance from the bottom of the viewport up to the actor's center
    /// at both the start and the end point.
    pub ground_offset: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub palette: WetnessPalette,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(30.0, 60.0),
            ground_offset: 80.0,
            walk_speed: 100.0,
            run_speed: 300.0,
            palette: WetnessPalette::default(),
        }
    }
}

/// The walker. Moves point to point in a straight line and soaks up rain.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Center of the actor's bounds.
    position: Vec2,
    size: Vec2,
    target: Vec2,
    speed: f32,
    moving: bool,
    /// Unbounded; only the display color saturates.
    wetness: f32,
}

impl Actor {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            target: position,
            speed: 0.0,
            moving: false,
            wetness: 0.0,
        }
    }

    /// Begin moving toward `target`. Ignored while a move is in progress;
    /// returns whether the move was accepted.
    pub fn start_move(&mut self, target: Vec2, speed: f32) -> bool {
        if self.moving {
            return false;
        }
        self.target = target;
        self.speed = speed;
        self.moving = true;
        true
    }

    /// Advance toward the target. Returns true on the frame the actor arrives.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.moving {
            return false;
        }
        let to_target = self.target - self.position;
        let distance = to_target.length();
        let step = self.speed * dt;
        // A step that reaches or passes the target lands on it instead of overshooting.
        if distance < ARRIVAL_DISTANCE || step >= distance {
            self.position = self.target;
            self.moving = false;
            return true;
        }
        self.position += to_target / distance * step;
        false
    }

    /// Dry off, stop, and teleport to `position`.
    pub fn reset(&mut self, position: Vec2) {
        self.wetness = 0.0;
        self.moving = false;
        self.position = position;
        self.target = position;
        self.speed = 0.0;
    }

    pub fn add_wetness(&mut self, area: f32) {
        self.wetness += area.max(0.0);
    }

    pub fn wetness(&self) -> f32 {
        self.wetness
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Only meaningful while moving.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Only meaningful while moving.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_extents(self.position, self.size * 0.5)
    }

    pub fn display_color(&self, palette: &WetnessPalette) -> Color {
        palette.color(self.wetness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_at(x: f32, y: f32) -> Actor {
        Actor::new(Vec2::new(x, y), Vec2::new(30.0, 60.0))
    }

    #[test]
    fn start_move_ignored_while_moving() {
        let mut a = actor_at(0.0, 0.0);
        assert!(a.start_move(Vec2::new(100.0, 0.0), 50.0));
        assert!(!a.start_move(Vec2::new(-100.0, 0.0), 500.0));
        assert_eq!(a.target(), Vec2::new(100.0, 0.0));
        assert_eq!(a.speed(), 50.0);
    }

    #[test]
    fn zero_distance_stops_immediately() {
        let mut a = actor_at(10.0, 20.0);
        a.start_move(Vec2::new(10.0, 20.0), 100.0);
        assert!(a.update(0.016));
        assert!(!a.is_moving());
        assert_eq!(a.position(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn moves_speed_times_dt_along_direction() {
        let mut a = actor_at(0.0, 0.0);
        a.start_move(Vec2::new(300.0, 400.0), 100.0);
        assert!(!a.update(0.5));
        // 50 units along (0.6, 0.8).
        assert!((a.position() - Vec2::new(30.0, 40.0)).length() < 1e-4);
        assert!(a.is_moving());
    }

    #[test]
    fn snaps_onto_target_when_close() {
        let mut a = actor_at(0.0, 0.0);
        a.start_move(Vec2::new(100.0, 0.0), 100.0);
        let mut arrived_frames = 0;
        for _ in 0..200 {
            if a.update(1.0 / 60.0) {
                arrived_frames += 1;
            }
        }
        assert_eq!(arrived_frames, 1);
        assert_eq!(a.position(), Vec2::new(100.0, 0.0));
        assert!(!a.is_moving());
    }

    #[test]
    fn large_steps_land_on_target() {
        // 21 units per step never falls inside the arrival window from 960 away.
        let mut a = actor_at(0.0, 0.0);
        a.start_move(Vec2::new(960.0, 0.0), 300.0);
        let mut arrived = false;
        for _ in 0..1000 {
            arrived |= a.update(0.07);
        }
        assert!(arrived);
        assert!(!a.is_moving());
        assert_eq!(a.position(), Vec2::new(960.0, 0.0));
    }

    #[test]
    fn step_exactly_reaching_target_arrives() {
        let mut a = actor_at(0.0, 0.0);
        a.start_move(Vec2::new(50.0, 0.0), 100.0);
        assert!(a.update(0.5));
        assert_eq!(a.position(), Vec2::new(50.0, 0.0));
    }

    #[test]
    fn still_moving_outside_threshold() {
        let mut a = actor_at(0.0, 0.0);
        a.start_move(Vec2::new(5.0, 0.0), 1.0);
        assert!(!a.update(0.0));
        assert!(a.is_moving());
        assert_eq!(a.position(), Vec2::ZERO);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut a = actor_at(0.0, 0.0);
        a.add_wetness(42.0);
        a.start_move(Vec2::new(100.0, 0.0), 10.0);
        a.update(0.1);

        a.reset(Vec2::new(7.0, 8.0));
        let once = (a.position(), a.is_moving(), a.wetness());
        a.reset(Vec2::new(7.0, 8.0));
        let twice = (a.position(), a.is_moving(), a.wetness());

        assert_eq!(once, (Vec2::new(7.0, 8.0), false, 0.0));
        assert_eq!(once, twice);
    }

    #[test]
    fn reset_allows_new_move() {
        let mut a = actor_at(0.0, 0.0);
        a.start_move(Vec2::new(100.0, 0.0), 10.0);
        a.reset(Vec2::ZERO);
        assert!(a.start_move(Vec2::new(-100.0, 0.0), 30.0));
        assert_eq!(a.target(), Vec2::new(-100.0, 0.0));
    }

    #[test]
    fn wetness_accumulates_unbounded() {
        let mut a = actor_at(0.0, 0.0);
        let palette = WetnessPalette::default();
        a.add_wetness(palette.max_wetness);
        a.add_wetness(palette.max_wetness);
        assert_eq!(a.wetness(), palette.max_wetness * 2.0);
        assert_eq!(a.display_color(&palette), palette.wet);
    }

    #[test]
    fn bounds_centered_on_position() {
        let a = actor_at(100.0, 100.0);
        let b = a.bounds();
        assert_eq!(b.min, Vec2::new(85.0, 70.0));
        assert_eq!(b.max, Vec2::new(115.0, 130.0));
    }
}

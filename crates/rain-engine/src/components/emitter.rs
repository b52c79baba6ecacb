use serde::{Deserialize, Serialize};
use super::color::Color;

/// How many drops the emitter releases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnRate {
    /// A fixed count every frame, regardless of elapsed time.
    /// Higher frame rates therefore produce more rain per second.
    PerFrame(u32),
    /// Drops per second, carried across frames with a fractional accumulator.
    PerSecond(f32),
}

/// Rain emitter settings plus its spawn accumulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RainEmitter {
    pub rate: SpawnRate,
    /// Optional population ceiling. `None` spawns unconditionally.
    pub max_drops: Option<usize>,
    /// Min/max drop width. Height is always twice the width.
    pub size_range: (f32, f32),
    /// Vertical spawn band, above the top edge of the viewport.
    pub spawn_y_range: (f32, f32),
    /// Downward acceleration in units/s². Exaggerated for visibility.
    pub gravity: f32,
    pub tint: Color,
    #[serde(skip)]
    accumulator: f32,
}

impl Default for RainEmitter {
    fn default() -> Self {
        Self {
            rate: SpawnRate::PerFrame(175),
            max_drops: None,
            size_range: (2.0, 5.0),
            spawn_y_range: (-100.0, -50.0),
            gravity: 9.81 * 10.0,
            tint: Color::rgba(173, 216, 230, 200),
            accumulator: 0.0,
        }
    }
}

impl RainEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder pattern --

    pub fn with_rate(mut self, rate: SpawnRate) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_max_drops(mut self, max: usize) -> Self {
        self.max_drops = Some(max);
        self
    }

    /// Advance the emitter by `dt` seconds. Returns how many drops to spawn,
    /// given `live` drops already present.
    pub fn tick(&mut self, dt: f32, live: usize) -> usize {
        let wanted = match self.rate {
            SpawnRate::PerFrame(n) => n as usize,
            SpawnRate::PerSecond(rate) => {
                self.accumulator += rate.max(0.0) * dt;
                let count = self.accumulator as usize;
                self.accumulator -= count as f32;
                count
            }
        };
        match self.max_drops {
            Some(max) => wanted.min(max.saturating_sub(live)),
            None => wanted,
        }
    }

    /// Forget any fractional spawn carried from previous frames.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_emitter() {
        let e = RainEmitter::default();
        assert_eq!(e.rate, SpawnRate::PerFrame(175));
        assert_eq!(e.max_drops, None);
        assert_eq!(e.size_range, (2.0, 5.0));
    }

    #[test]
    fn per_frame_ignores_dt() {
        let mut e = RainEmitter::new().with_rate(SpawnRate::PerFrame(5));
        assert_eq!(e.tick(0.001, 0), 5);
        assert_eq!(e.tick(1.0, 10_000), 5);
        assert_eq!(e.tick(0.0, 0), 5);
    }

    #[test]
    fn per_second_accumulates() {
        let mut e = RainEmitter::new().with_rate(SpawnRate::PerSecond(60.0));
        assert_eq!(e.tick(0.5 / 60.0, 0), 0);
        assert_eq!(e.tick(0.6 / 60.0, 0), 1);
    }

    #[test]
    fn cap_limits_spawn() {
        let mut e = RainEmitter::new()
            .with_rate(SpawnRate::PerFrame(10))
            .with_max_drops(25);
        assert_eq!(e.tick(0.016, 0), 10);
        assert_eq!(e.tick(0.016, 20), 5);
        assert_eq!(e.tick(0.016, 25), 0);
        assert_eq!(e.tick(0.016, 40), 0);
    }

    #[test]
    fn reset_clears_accumulator() {
        let mut e = RainEmitter::new().with_rate(SpawnRate::PerSecond(1.0));
        e.tick(0.9, 0);
        e.reset();
        assert_eq!(e.tick(0.2, 0), 0);
    }
}

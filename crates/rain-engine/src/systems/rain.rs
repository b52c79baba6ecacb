use glam::Vec2;
use crate::components::emitter::RainEmitter;
use crate::components::raindrop::Raindrop;
use crate::core::platform::Platforms;
use crate::core::rng::Rng;

/// Cumulative counters since the system was created or last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RainStats {
    pub spawned: u64,
    pub culled_off_screen: u64,
    pub culled_on_platform: u64,
}

/// Owns every live raindrop.
pub struct RainSystem {
    drops: Vec<Raindrop>,
    viewport: Vec2,
    platforms: Platforms,
    emitter: RainEmitter,
    rng: Rng,
    stats: RainStats,
}

impl RainSystem {
    pub fn new(viewport: Vec2, platforms: Platforms, emitter: RainEmitter, seed: u64) -> Self {
        Self {
            drops: Vec::with_capacity(4096),
            viewport,
            platforms,
            emitter,
            rng: Rng::new(seed),
            stats: RainStats::default(),
        }
    }

    /// Discard every drop and adopt new bounds. Used when the viewport changes.
    pub fn reset(&mut self, viewport: Vec2, platforms: Platforms) {
        self.drops.clear();
        self.viewport = viewport;
        self.platforms = platforms;
        self.emitter.reset();
        self.stats = RainStats::default();
    }

    /// One frame: integrate, cull, then spawn.
    pub fn update(&mut self, dt: f32) {
        let gravity = self.emitter.gravity;
        for drop in &mut self.drops {
            drop.integrate(dt, gravity);
        }

        // Single pass; a drop is removed if either predicate holds.
        let viewport = self.viewport;
        let platforms = self.platforms;
        let stats = &mut self.stats;
        self.drops.retain(|drop| {
            if drop.is_off_screen(viewport) {
                stats.culled_off_screen += 1;
                false
            } else if drop.is_on_platform(&platforms) {
                stats.culled_on_platform += 1;
                false
            } else {
                true
            }
        });

        let count = self.emitter.tick(dt, self.drops.len());
        self.spawn(count);

        log::debug!(
            "rain: {} live, spawned {}, culled {} off-screen / {} on platforms",
            self.drops.len(),
            self.stats.spawned,
            self.stats.culled_off_screen,
            self.stats.culled_on_platform,
        );
    }

    fn spawn(&mut self, count: usize) {
        self.drops.reserve(count);
        for _ in 0..count {
            let drop = Raindrop::spawn(&mut self.rng, self.viewport, &self.emitter);
            self.drops.push(drop);
        }
        self.stats.spawned += count as u64;
    }

    pub fn drops(&self) -> &[Raindrop] {
        &self.drops
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub fn stats(&self) -> RainStats {
        self.stats
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn platforms(&self) -> &Platforms {
        &self.platforms
    }

    pub fn emitter(&self) -> &RainEmitter {
        &self.emitter
    }

    #[cfg(test)]
    fn push(&mut self, drop: Raindrop) {
        self.drops.push(drop);
    }
}

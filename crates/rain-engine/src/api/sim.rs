use glam::Vec2;
use crate::api::config::{validate_viewport, SimConfig};
use crate::api::types::{SimEvent, SimEventKind};
use crate::components::actor::Actor;
use crate::components::raindrop::Raindrop;
use crate::core::platform::Platforms;
use crate::core::time::FrameClock;
use crate::input::queue::Command;
use crate::systems::rain::RainSystem;
use crate::systems::soak::{soak, SoakReport};

/// What happened during one `Simulation::frame`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// The delta actually simulated, after sanitizing.
    pub dt: f32,
    pub soak: SoakReport,
    pub arrived: bool,
}

/// The per-frame driver: owns the rain, the platforms and the actor, and runs
/// them in a fixed order so collisions always see post-update positions.
pub struct Simulation {
    config: SimConfig,
    viewport: Vec2,
    platforms: Platforms,
    rain: RainSystem,
    actor: Actor,
    clock: FrameClock,
    events: Vec<SimEvent>,
    terminated: bool,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let viewport = config.viewport;
        let platforms = Platforms::layout(viewport, &config.platforms);
        let rain = RainSystem::new(viewport, platforms, config.rain.clone(), config.seed);
        let actor = Actor::new(start_point(viewport, &config), config.actor.size);
        let clock = FrameClock::new(config.max_dt);
        log::info!("simulation: {}x{} viewport, seed {}", viewport.x, viewport.y, config.seed);
        Self {
            config,
            viewport,
            platforms,
            rain,
            actor,
            clock,
            events: Vec::new(),
            terminated: false,
        }
    }

    /// Advance one frame: rain, then actor, then the soak pass.
    /// Rendering reads the resulting state afterwards.
    pub fn frame(&mut self, raw_dt: f32) -> FrameReport {
        if self.terminated {
            return FrameReport::default();
        }
        let dt = self.clock.advance(raw_dt);

        self.rain.update(dt);
        let arrived = self.actor.update(dt);
        let soak = soak(self.rain.drops(), &mut self.actor, &self.platforms, self.config.shelter);

        if arrived {
            log::info!("actor arrived with wetness {:.1}", self.actor.wetness());
            self.events.push(SimEvent::new(SimEventKind::ActorArrived, self.actor.wetness(), 0.0, 0.0));
        }
        FrameReport { dt, soak, arrived }
    }

    pub fn apply(&mut self, command: Command) {
        if self.terminated {
            return;
        }
        match command {
            Command::Walk => self.begin_crossing(self.config.actor.walk_speed),
            Command::Run => self.begin_crossing(self.config.actor.run_speed),
            Command::Terminate => {
                log::info!("simulation terminated after {} frames", self.clock.frames());
                self.terminated = true;
                self.events.push(SimEvent::new(SimEventKind::Terminated, 0.0, 0.0, 0.0));
            }
            Command::Resize { width, height } => self.resize(Vec2::new(width, height)),
        }
    }

    /// Restart from the start point toward the end point.
    fn begin_crossing(&mut self, speed: f32) {
        let start = start_point(self.viewport, &self.config);
        let end = end_point(self.viewport, &self.config);
        self.actor.reset(start);
        self.actor.start_move(end, speed);
        log::info!("crossing started at speed {}", speed);
        self.events.push(SimEvent::new(SimEventKind::MoveStarted, speed, 0.0, 0.0));
    }

    /// Rebuild viewport-dependent state. Drops are discarded and the actor
    /// returns to the new start point. Non-positive sizes are ignored.
    pub fn resize(&mut self, viewport: Vec2) {
        if let Err(e) = validate_viewport(viewport) {
            log::warn!("ignoring resize: {}", e);
            return;
        }
        self.viewport = viewport;
        self.platforms = Platforms::layout(viewport, &self.config.platforms);
        self.rain.reset(viewport, self.platforms);
        self.actor.reset(start_point(viewport, &self.config));
        log::info!("resized to {}x{}", viewport.x, viewport.y);
        self.events.push(SimEvent::new(SimEventKind::Resized, viewport.x, viewport.y, 0.0));
    }

    /// Take the events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn drops(&self) -> &[Raindrop] {
        self.rain.drops()
    }

    pub fn rain(&self) -> &RainSystem {
        &self.rain
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn platforms(&self) -> &Platforms {
        &self.platforms
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn wetness(&self) -> f32 {
        self.actor.wetness()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}

/// Where a crossing begins: under the start platform, at ground level.
pub fn start_point(viewport: Vec2, config: &SimConfig) -> Vec2 {
    Vec2::new(viewport.x * config.platforms.start_fraction, viewport.y - config.actor.ground_offset)
}

/// Where a crossing ends: under the end platform, at ground level.
pub fn end_point(viewport: Vec2, config: &SimConfig) -> Vec2 {
    Vec2::new(viewport.x * config.platforms.end_fraction, viewport.y - config.actor.ground_offset)
}

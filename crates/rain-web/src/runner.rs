use rain_engine::{
    build_render_buffer, Command, ConfigError, InputEvent, InputQueue, RenderBuffer, SimConfig,
    SimEvent, Simulation,
};

/// Wires the simulation to the host frame loop.
///
/// The host calls `push_input` as events arrive and `tick` once per animation
/// frame, then reads the draw buffer and events through the pointer accessors.
pub struct SimRunner {
    sim: Simulation,
    input: InputQueue,
    render_buffer: RenderBuffer,
    /// Events from the most recent tick, kept alive for host reads.
    events: Vec<SimEvent>,
}

impl SimRunner {
    pub fn new(config: SimConfig) -> Self {
        Self {
            sim: Simulation::new(config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            events: Vec::new(),
        }
    }

    /// Build a runner from a JSON config. An empty string uses the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = if json.trim().is_empty() {
            SimConfig::default()
        } else {
            SimConfig::from_json(json)?
        };
        Ok(Self::new(config))
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued commands, step the simulation, rebuild the draw buffer.
    pub fn tick(&mut self, dt: f32) {
        let keys = self.sim.config().keys;
        for event in self.input.drain() {
            if let Some(command) = keys.command_for(&event) {
                self.sim.apply(command);
            }
        }

        self.sim.frame(dt);
        build_render_buffer(&self.sim, &mut self.render_buffer);
        self.events = self.sim.drain_events();
    }

    pub fn apply(&mut self, command: Command) {
        self.sim.apply(command);
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    // ---- Pointer accessors for host-side reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn drops_start(&self) -> u32 {
        self.render_buffer.drops_start
    }

    pub fn actor_index(&self) -> u32 {
        self.render_buffer.actor_index
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn wetness(&self) -> f32 {
        self.sim.wetness()
    }

    pub fn drop_count(&self) -> u32 {
        self.sim.drops().len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.sim.viewport().x
    }

    pub fn viewport_height(&self) -> f32 {
        self.sim.viewport().y
    }

    pub fn is_terminated(&self) -> bool {
        self.sim.is_terminated()
    }
}

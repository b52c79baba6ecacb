pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{SimConfig, ConfigError};
pub use api::sim::{Simulation, FrameReport};
pub use api::types::{SimEvent, SimEventKind};
pub use components::actor::{Actor, ActorConfig, ARRIVAL_DISTANCE};
pub use components::color::{Color, WetnessPalette};
pub use components::emitter::{RainEmitter, SpawnRate};
pub use components::raindrop::Raindrop;
pub use crate::core::geometry::Rect;
pub use crate::core::platform::{Platform, PlatformConfig, Platforms};
pub use crate::core::rng::Rng;
pub use crate::core::time::FrameClock;
pub use input::queue::{Command, InputEvent, InputQueue, KeyBindings};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use systems::rain::{RainStats, RainSystem};
pub use systems::render::build_render_buffer;
pub use systems::soak::{soak, ShelterPolicy, SoakReport};

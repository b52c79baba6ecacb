use std::fmt;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::components::actor::ActorConfig;
use crate::components::emitter::{RainEmitter, SpawnRate};
use crate::core::platform::PlatformConfig;
use crate::input::queue::KeyBindings;
use crate::systems::soak::ShelterPolicy;

/// Errors from loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON could not be parsed.
    Parse(serde_json::Error),
    /// The JSON parsed but describes an unusable setup.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Everything the simulation needs, provided by the host.
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Initial viewport size in world units.
    pub viewport: Vec2,
    pub rain: RainEmitter,
    pub platforms: PlatformConfig,
    pub actor: ActorConfig,
    pub keys: KeyBindings,
    /// Ceiling on a single frame delta. `None` simulates stalls as-is.
    pub max_dt: Option<f32>,
    pub shelter: ShelterPolicy,
    /// Seed for drop placement.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(1280.0, 720.0),
            rain: RainEmitter::default(),
            platforms: PlatformConfig::default(),
            actor: ActorConfig::default(),
            keys: KeyBindings::default(),
            max_dt: None,
            shelter: ShelterPolicy::default(),
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_viewport(self.viewport)?;

        let (min, max) = self.rain.size_range;
        if !(min > 0.0 && min <= max) {
            return Err(ConfigError::Invalid(format!("drop size range ({}, {}) must satisfy 0 < min <= max", min, max)));
        }
        let (y0, y1) = self.rain.spawn_y_range;
        if y0 > y1 {
            return Err(ConfigError::Invalid(format!("spawn y range ({}, {}) is inverted", y0, y1)));
        }
        let gravity = self.rain.gravity;
        if !(gravity.is_finite() && gravity >= 0.0) {
            return Err(ConfigError::Invalid(format!("gravity {} must be a non-negative number", gravity)));
        }
        if let SpawnRate::PerSecond(rate) = self.rain.rate {
            if !(rate >= 0.0 && rate.is_finite()) {
                return Err(ConfigError::Invalid(format!("spawn rate {} must be a non-negative number", rate)));
            }
        }
        if self.actor.palette.max_wetness <= 0.0 {
            return Err(ConfigError::Invalid("max_wetness must be positive".to_string()));
        }
        if self.actor.walk_speed <= 0.0 || self.actor.run_speed <= 0.0 {
            return Err(ConfigError::Invalid("walk and run speeds must be positive".to_string()));
        }
        if let Some(max_dt) = self.max_dt {
            if max_dt <= 0.0 {
                return Err(ConfigError::Invalid(format!("max_dt {} must be positive", max_dt)));
            }
        }
        Ok(())
    }
}

/// Viewports must have a positive, finite area.
pub fn validate_viewport(viewport: Vec2) -> Result<(), ConfigError> {
    if viewport.is_finite() && viewport.x > 0.0 && viewport.y > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("viewport {}x{} must be positive", viewport.x, viewport.y)))
    }
}

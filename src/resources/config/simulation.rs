use super::{ConfigError, PhysicsConfig, RenderConfig, ScenarioConfig};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Resource)]
pub struct SimulationConfig {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl SimulationConfig {
    /// Load a configuration file. Files ending in `.json` are read as JSON,
    /// everything else as YAML. The result is validated before it is returned.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_reader(file)?,
            _ => serde_yaml::from_reader(file)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as YAML. The binary never calls this; it exists
    /// to produce starting files for the optional config argument.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        positive("time_step", physics.time_step)?;
        non_negative("cutoff", physics.cutoff)?;

        let scenario = &self.scenario;
        positive("ball_radius", scenario.ball_radius)?;
        positive("ball_mass", scenario.ball_mass)?;
        non_negative("ground_friction", scenario.ground_friction)?;
        non_negative("ball_friction", scenario.ball_friction)?;
        if (scenario.ground_end - scenario.ground_start).norm() == 0.0 {
            return Err(invalid("ground segment has zero length"));
        }
        let vectors = [
            scenario.gravity,
            scenario.ground_start,
            scenario.ground_end,
            scenario.ball_position,
        ];
        if vectors.iter().any(|v| v.iter().any(|c| !c.is_finite())) {
            return Err(invalid("scenario vectors must be finite"));
        }

        let render = &self.render;
        if render.screen_width == 0 || render.screen_height == 0 {
            return Err(invalid("screen dimensions must be non-zero"));
        }
        positive("ball_sprite_size", render.ball_sprite_size as f64)?;
        if !(0.0..=1.0).contains(&render.ball_shade) {
            return Err(invalid(format!(
                "ball_shade must be within 0..=1, got {}",
                render.ball_shade
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(invalid(format!("{name} must be positive, got {value}")));
    }
    Ok(())
}

fn non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(invalid(format!("{name} must be non-negative, got {value}")));
    }
    Ok(())
}

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// The one scene this program knows: a tilted static ground segment and a
/// dynamic ball dropped above it. Coordinates are screen space, origin at the
/// top-left corner with y pointing down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub gravity: Vector2<f64>,
    pub ground_start: Vector2<f64>,
    pub ground_end: Vector2<f64>,
    pub ground_friction: f64,
    pub ball_radius: f64,
    pub ball_mass: f64,
    pub ball_friction: f64,
    pub ball_position: Vector2<f64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::new(0.0, 100.0),
            ground_start: Vector2::zeros(),
            ground_end: Vector2::new(800.0, 600.0),
            ground_friction: 1.0,
            ball_radius: 5.0,
            ball_mass: 1.0,
            ball_friction: 0.7,
            ball_position: Vector2::new(400.0, 150.0),
        }
    }
}

use ballroll::resources::{PhysicsConfig, ScenarioConfig};
use nalgebra::Vector2;

/// Steps needed to cover `duration` seconds at `time_step`
pub fn steps_for(duration: f64, time_step: f64) -> usize {
    (duration / time_step).ceil() as usize
}

/// The reference scenario: 60 Hz steps, frozen after six simulated seconds
pub fn reference_physics() -> PhysicsConfig {
    PhysicsConfig {
        time_step: 1.0 / 60.0,
        cutoff: 6.0,
    }
}

/// A ball alone in space with no gravity
pub fn weightless_scenario() -> ScenarioConfig {
    ScenarioConfig {
        gravity: Vector2::zeros(),
        ..Default::default()
    }
}

mod clock;
pub mod config;
mod physics_world;
mod transformations;

pub use clock::{SimPhase, SimulationClock};
pub use config::{
    physics::PhysicsConfig, render::RenderConfig, scenario::ScenarioConfig,
    simulation::SimulationConfig, ConfigError,
};
pub use physics_world::{BallBody, BodyState, PhysicsWorld};
pub use transformations::{Frame, ScreenTransform, TransformError};

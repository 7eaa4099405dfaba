mod error;
pub mod physics;
pub mod render;
pub mod scenario;
pub mod simulation;

pub use error::ConfigError;
pub use physics::PhysicsConfig;
pub use render::RenderConfig;
pub use scenario::ScenarioConfig;
pub use simulation::SimulationConfig;

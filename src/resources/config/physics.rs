use serde::{Deserialize, Serialize};

/// Stepping parameters for the physics world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed simulated time advanced per step [s]
    pub time_step: f64,
    /// Elapsed simulated time after which stepping stops [s]
    pub cutoff: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            cutoff: 6.0,
        }
    }
}

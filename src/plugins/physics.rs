use crate::resources::{SimulationClock, SimulationConfig};
use crate::systems::{build_scenario, physics_step_system, Scenario};
use bevy::prelude::*;

/// Physics simulation stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PhysicsSet {
    Step,
}

/// Builds the scenario and advances it once per fixed update until the
/// configured cutoff.
pub struct PhysicsPlugin {
    config: SimulationConfig,
}

impl Default for PhysicsPlugin {
    fn default() -> Self {
        Self::with_config(SimulationConfig::default())
    }
}

impl PhysicsPlugin {
    /// A configuration that fails [`SimulationConfig::validate`] is replaced
    /// by the default one when the plugin is built.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                error!("{}. Falling back to the default configuration", e);
                SimulationConfig::default()
            }
        };
        let physics = &config.physics;
        let Scenario { world, ball } = build_scenario(&config.scenario, physics);

        app.insert_resource(config.clone())
            .insert_resource(world)
            .insert_resource(ball)
            .insert_resource(SimulationClock::new(physics.time_step, physics.cutoff));

        // The physics step is fixed and independent of the display rate.
        app.insert_resource(Time::<Fixed>::from_seconds(physics.time_step));

        app.configure_sets(FixedUpdate, PhysicsSet::Step);
        app.add_systems(FixedUpdate, physics_step_system.in_set(PhysicsSet::Step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::PhysicsConfig;
    use std::time::Duration;

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let config = SimulationConfig {
            physics: PhysicsConfig {
                time_step: 0.0,
                cutoff: 6.0,
            },
            ..Default::default()
        };

        let mut app = App::new();
        app.add_plugins(PhysicsPlugin::with_config(config));

        let world = app.world();
        assert_eq!(
            world.resource::<SimulationConfig>(),
            &SimulationConfig::default()
        );
        assert_eq!(world.resource::<SimulationClock>().step(), 1.0 / 60.0);
        assert_eq!(
            world.resource::<Time<Fixed>>().timestep(),
            Duration::from_secs_f64(1.0 / 60.0)
        );
    }

    #[test]
    fn test_negative_time_step_does_not_panic() {
        let config = SimulationConfig {
            physics: PhysicsConfig {
                time_step: -0.5,
                cutoff: 6.0,
            },
            ..Default::default()
        };

        let mut app = App::new();
        app.add_plugins(PhysicsPlugin::with_config(config));

        assert!(app.world().resource::<SimulationClock>().step() > 0.0);
    }
}

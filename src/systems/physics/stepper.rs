use bevy::prelude::*;

use crate::resources::{PhysicsWorld, SimPhase, SimulationClock};

/// Advance the world by one fixed step while the clock is running.
///
/// Once the clock reaches its cutoff the world is left untouched, so the
/// ball keeps its last position and velocity for every later call.
/// Returns whether the world was stepped.
pub fn advance_frame(world: &mut PhysicsWorld, clock: &mut SimulationClock) -> bool {
    if !clock.tick() {
        return false;
    }
    world.step();
    true
}

/// Runs once per fixed update.
pub fn physics_step_system(mut world: ResMut<PhysicsWorld>, mut clock: ResMut<SimulationClock>) {
    let was_running = clock.is_running();
    advance_frame(&mut world, &mut clock);

    if was_running && clock.phase() == SimPhase::Frozen {
        info!(
            "Simulation frozen after {} steps ({:.2} s)",
            clock.steps(),
            clock.elapsed()
        );
    }
}

use crate::resources::{BallBody, PhysicsConfig, PhysicsWorld, ScenarioConfig};

/// A ready-to-step world together with the ball it simulates.
pub struct Scenario {
    pub world: PhysicsWorld,
    pub ball: BallBody,
}

/// Build the tilted-ground scene: a static segment for the ground and a
/// dynamic disc for the ball, under the configured gravity.
pub fn build_scenario(scenario: &ScenarioConfig, physics: &PhysicsConfig) -> Scenario {
    let mut world = PhysicsWorld::new(scenario.gravity, physics.time_step);

    world.add_static_segment(
        scenario.ground_start,
        scenario.ground_end,
        scenario.ground_friction,
    );

    let ball = world.add_dynamic_ball(
        scenario.ball_position,
        scenario.ball_radius,
        scenario.ball_mass,
        scenario.ball_friction,
    );

    Scenario {
        world,
        ball: BallBody(ball),
    }
}

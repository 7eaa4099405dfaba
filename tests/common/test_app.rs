use bevy::prelude::*;
use ballroll::{
    components::{BallSprite, DebugOverlay},
    plugins::{PhysicsPlugin, TransformationPlugin},
    resources::{
        BallBody, BodyState, PhysicsConfig, PhysicsWorld, ScenarioConfig, SimulationClock,
        SimulationConfig,
    },
    systems::{sync_ball_sprite_system, update_debug_overlay_system},
};

// Builder for creating a headless test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    physics_config: Option<PhysicsConfig>,
    scenario_config: Option<ScenarioConfig>,
    render_systems: bool,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_scenario(mut self, config: ScenarioConfig) -> Self {
        self.scenario_config = Some(config);
        self
    }

    /// Add the per-frame presentation systems, with a ball sprite and an
    /// overlay entity to act on. No window or renderer is involved.
    pub fn with_render_systems(mut self) -> Self {
        self.render_systems = true;
        self
    }

    pub fn build(self) -> TestApp {
        let config = SimulationConfig {
            physics: self.physics_config.unwrap_or_default(),
            scenario: self.scenario_config.unwrap_or_default(),
            ..Default::default()
        };

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(PhysicsPlugin::with_config(config.clone()));

        if self.render_systems {
            app.add_plugins(TransformationPlugin::new(
                config.render.screen_width,
                config.render.screen_height,
            ))
            .add_systems(
                Update,
                (sync_ball_sprite_system, update_debug_overlay_system),
            );

            let world = app.world_mut();
            world.spawn((BallSprite, Transform::default()));
            world.spawn((DebugOverlay, Text::new(""), Visibility::Hidden));
        }

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Run the fixed update schedule once, independent of wall-clock time.
    pub fn run_frame(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    /// Run the per-frame update schedule once.
    pub fn run_update(&mut self) {
        self.app.world_mut().run_schedule(Update);
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.run_frame();
        }
    }

    pub fn clock(&self) -> &SimulationClock {
        self.app.world().resource::<SimulationClock>()
    }

    pub fn ball_state(&self) -> BodyState {
        let ball = self.app.world().resource::<BallBody>();
        self.app
            .world()
            .resource::<PhysicsWorld>()
            .body_state(ball.0)
            .expect("ball body missing from physics world")
    }

    /// Run `steps` frames and collect the ball state after each one.
    pub fn record(&mut self, steps: usize) -> Vec<BodyState> {
        (0..steps)
            .map(|_| {
                self.run_frame();
                self.ball_state()
            })
            .collect()
    }

    pub fn overlay(&mut self) -> Option<(String, Visibility)> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<(&Text, &Visibility), With<DebugOverlay>>();
        query
            .get_single(world)
            .ok()
            .map(|(text, visibility)| (text.0.clone(), *visibility))
    }

    pub fn ball_sprite_translation(&mut self) -> Option<Vec3> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&Transform, With<BallSprite>>();
        query.get_single(world).ok().map(|t| t.translation)
    }
}

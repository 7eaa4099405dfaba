use bevy::prelude::Resource;
use nalgebra::{Point2, Vector2};
use rapier2d_f64::prelude::*;

/// Snapshot of a rigid body's kinematic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Centre of mass position [px]
    pub position: Vector2<f64>,
    /// Linear velocity [px/s]
    pub velocity: Vector2<f64>,
    /// Orientation [rad]
    pub angle: f64,
    /// Angular velocity [rad/s]
    pub angular_velocity: f64,
}

/// Handle of the dynamic ball inside [`PhysicsWorld`].
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BallBody(pub RigidBodyHandle);

/// Owns every rapier structure needed to advance the simulation.
///
/// Shapes added without a parent body are attached to the implicit static
/// ground body, so they never move.
#[derive(Resource)]
pub struct PhysicsWorld {
    gravity: Vector2<f64>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create an empty world that advances by `time_step` seconds per step.
    pub fn new(gravity: Vector2<f64>, time_step: f64) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = time_step;

        Self {
            gravity,
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    pub fn gravity(&self) -> Vector2<f64> {
        self.gravity
    }

    pub fn time_step(&self) -> f64 {
        self.integration_parameters.dt
    }

    /// Add an immovable line segment from `a` to `b`.
    pub fn add_static_segment(
        &mut self,
        a: Vector2<f64>,
        b: Vector2<f64>,
        friction: f64,
    ) -> ColliderHandle {
        let collider = ColliderBuilder::segment(Point2::from(a), Point2::from(b))
            .friction(friction)
            .friction_combine_rule(CoefficientCombineRule::Multiply)
            .restitution(0.0)
            .build();
        self.colliders.insert(collider)
    }

    /// Add a dynamic solid disc. Its angular inertia is derived from `mass`
    /// and `radius` (m r^2 / 2).
    pub fn add_dynamic_ball(
        &mut self,
        position: Vector2<f64>,
        radius: f64,
        mass: f64,
        friction: f64,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic().translation(position).build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::ball(radius)
            .mass(mass)
            .friction(friction)
            .friction_combine_rule(CoefficientCombineRule::Multiply)
            .restitution(0.0)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        if let Some(body) = self.bodies.get_mut(handle) {
            body.recompute_mass_properties_from_colliders(&self.colliders);
        }

        handle
    }

    /// Advance the world by exactly one fixed time step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn position(&self, handle: RigidBodyHandle) -> Option<Vector2<f64>> {
        self.bodies.get(handle).map(|body| *body.translation())
    }

    pub fn velocity(&self, handle: RigidBodyHandle) -> Option<Vector2<f64>> {
        self.bodies.get(handle).map(|body| *body.linvel())
    }

    pub fn angle(&self, handle: RigidBodyHandle) -> Option<f64> {
        self.bodies.get(handle).map(|body| body.rotation().angle())
    }

    pub fn body_state(&self, handle: RigidBodyHandle) -> Option<BodyState> {
        self.bodies.get(handle).map(|body| BodyState {
            position: *body.translation(),
            velocity: *body.linvel(),
            angle: body.rotation().angle(),
            angular_velocity: body.angvel(),
        })
    }

    /// Principal angular inertia of a body, if it exists.
    pub fn angular_inertia(&self, handle: RigidBodyHandle) -> Option<f64> {
        self.bodies
            .get(handle)
            .map(|body| body.mass_properties().local_mprops.principal_inertia())
    }

    pub fn mass(&self, handle: RigidBodyHandle) -> Option<f64> {
        self.bodies.get(handle).map(|body| body.mass())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }
}

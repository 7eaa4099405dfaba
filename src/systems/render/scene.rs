use bevy::{prelude::*, render::camera::ScalingMode, sprite::Anchor};

use crate::components::{BallSprite, GroundLine};
use crate::resources::{BallBody, PhysicsWorld, ScreenTransform, SimulationConfig};

const BALL_LAYER: f32 = 10.0;

/// Spawn the camera, the ground line and the ball sprite.
pub fn spawn_scene(
    mut commands: Commands,
    config: Res<SimulationConfig>,
    transform: Res<ScreenTransform>,
    world: Res<PhysicsWorld>,
    ball: Res<BallBody>,
) {
    info!("{}", config.render.title);

    // Always show the full scene, whatever the window's physical size.
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: config.render.screen_width as f32,
                height: config.render.screen_height as f32,
            },
            ..OrthographicProjection::default_2d()
        },
    ));

    commands.spawn(GroundLine {
        start: config.scenario.ground_start,
        end: config.scenario.ground_end,
    });

    let Some(position) = world.position(ball.0) else {
        warn!("Ball body missing from physics world, no sprite spawned");
        return;
    };

    let shade = config.render.ball_shade;
    commands.spawn((
        BallSprite,
        Sprite {
            color: Color::srgb(shade, shade, shade),
            custom_size: Some(Vec2::splat(config.render.ball_sprite_size)),
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::from_translation(transform.render_from_physics(&position, BALL_LAYER)),
    ));
}

pub fn draw_ground_system(
    mut gizmos: Gizmos,
    transform: Res<ScreenTransform>,
    query: Query<&GroundLine>,
) {
    for ground in query.iter() {
        gizmos.line_2d(
            transform.render_point(&ground.start),
            transform.render_point(&ground.end),
            Color::WHITE,
        );
    }
}

/// Move the ball sprite to the ball's current position.
pub fn sync_ball_sprite_system(
    world: Res<PhysicsWorld>,
    ball: Res<BallBody>,
    transform_res: Res<ScreenTransform>,
    mut query: Query<&mut Transform, With<BallSprite>>,
) {
    let Some(position) = world.position(ball.0) else {
        return;
    };
    for mut transform in query.iter_mut() {
        transform.translation = transform_res.render_from_physics(&position, BALL_LAYER);
    }
}

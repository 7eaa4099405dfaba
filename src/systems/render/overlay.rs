use bevy::prelude::*;

use crate::components::DebugOverlay;
use crate::resources::{BallBody, BodyState, PhysicsWorld, SimulationClock};

/// One-line status shown in the top-left corner while the ball moves.
pub fn overlay_text(elapsed: f64, state: &BodyState) -> String {
    format!(
        "Time is {:5.2}. Ball is at ({:5.2}, {:5.2}). Its velocity is ({:5.2}, {:5.2})",
        elapsed, state.position.x, state.position.y, state.velocity.x, state.velocity.y,
    )
}

pub fn spawn_debug_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(4.0),
            ..default()
        },
    ));
}

/// Refresh the overlay text, hiding it once the simulation has frozen.
pub fn update_debug_overlay_system(
    world: Res<PhysicsWorld>,
    ball: Res<BallBody>,
    clock: Res<SimulationClock>,
    mut query: Query<(&mut Text, &mut Visibility), With<DebugOverlay>>,
) {
    let state = world.body_state(ball.0);
    for (mut text, mut visibility) in query.iter_mut() {
        match state {
            Some(state) if clock.is_running() => {
                **text = overlay_text(clock.elapsed(), &state);
                *visibility = Visibility::Inherited;
            }
            _ => *visibility = Visibility::Hidden,
        }
    }
}

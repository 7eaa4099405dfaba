use bevy::prelude::*;
use nalgebra::Vector2;

/// Sprite that follows the simulated ball.
#[derive(Component, Debug, Default)]
pub struct BallSprite;

/// Static ground segment drawn every frame, in physics coordinates.
#[derive(Component, Debug, Clone)]
pub struct GroundLine {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
}

/// Text node showing the simulation clock and ball state.
#[derive(Component, Debug, Default)]
pub struct DebugOverlay;

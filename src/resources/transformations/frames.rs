use bevy::prelude::*;
use nalgebra::Vector2;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Physics, // Screen space used by the physics world: origin top-left, x-right, y-down
    Render,  // Bevy 2D world frame: origin at window centre, x-right, y-up
}

#[derive(Error, Debug, PartialEq)]
pub enum TransformError {
    #[error("Invalid screen size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Maps physics coordinates onto the bevy 2D world so that the window shows
/// exactly the `width` x `height` region the physics scene is laid out in.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    width: f64,
    height: f64,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl ScreenTransform {
    pub fn new(width: u32, height: u32) -> Result<Self, TransformError> {
        if width == 0 || height == 0 {
            return Err(TransformError::InvalidSize { width, height });
        }
        Ok(Self {
            width: width as f64,
            height: height as f64,
        })
    }

    pub fn transform_position(
        &self,
        position: &Vector2<f64>,
        from: Frame,
        to: Frame,
    ) -> Vector2<f64> {
        match (from, to) {
            (Frame::Physics, Frame::Render) => Vector2::new(
                position.x - self.width / 2.0,
                self.height / 2.0 - position.y,
            ),
            (Frame::Render, Frame::Physics) => Vector2::new(
                position.x + self.width / 2.0,
                self.height / 2.0 - position.y,
            ),
            _ => *position,
        }
    }

    /// Physics position to a bevy translation on layer `z`.
    pub fn render_from_physics(&self, position: &Vector2<f64>, z: f32) -> Vec3 {
        let render = self.transform_position(position, Frame::Physics, Frame::Render);
        Vec3::new(render.x as f32, render.y as f32, z)
    }

    /// Physics position to a 2D point for gizmo drawing.
    pub fn render_point(&self, position: &Vector2<f64>) -> Vec2 {
        self.render_from_physics(position, 0.0).truncate()
    }
}

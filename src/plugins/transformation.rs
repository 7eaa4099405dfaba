use bevy::prelude::*;

use crate::resources::ScreenTransform;

/// Plugin that sets up the physics-to-render coordinate mapping
pub struct TransformationPlugin {
    width: u32,
    height: u32,
}

impl TransformationPlugin {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Plugin for TransformationPlugin {
    fn build(&self, app: &mut App) {
        match ScreenTransform::new(self.width, self.height) {
            Ok(resource) => {
                app.insert_resource(resource);
            }
            Err(e) => {
                error!("Failed to create screen transform: {}. Defaulting to 800x600", e);
                app.insert_resource(ScreenTransform::default());
            }
        }
    }
}

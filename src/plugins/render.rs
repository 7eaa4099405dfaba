use bevy::prelude::*;

use crate::plugins::TransformationPlugin;
use crate::systems::{
    draw_ground_system, spawn_debug_overlay, spawn_scene, sync_ball_sprite_system,
    update_debug_overlay_system,
};

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum RenderSet {
    Layout,  // Sprite transforms and ground line
    Overlay, // Debug text
}

/// Draws the ground, the ball and the debug overlay. Expects the resources
/// inserted by [`crate::plugins::PhysicsPlugin`].
pub struct SceneRenderPlugin {
    width: u32,
    height: u32,
}

impl SceneRenderPlugin {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Plugin for SceneRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(TransformationPlugin::new(self.width, self.height))
            .insert_resource(ClearColor(Color::BLACK))
            .configure_sets(Update, (RenderSet::Layout, RenderSet::Overlay).chain())
            .add_systems(Startup, (spawn_scene, spawn_debug_overlay))
            .add_systems(
                Update,
                (
                    (draw_ground_system, sync_ball_sprite_system).in_set(RenderSet::Layout),
                    update_debug_overlay_system.in_set(RenderSet::Overlay),
                ),
            );
    }
}

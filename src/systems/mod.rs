pub mod physics;
mod render;
pub mod scenario;

pub use physics::{advance_frame, physics_step_system};
pub use render::{
    draw_ground_system, overlay_text, spawn_debug_overlay, spawn_scene, sync_ball_sprite_system,
    update_debug_overlay_system,
};
pub use scenario::{build_scenario, Scenario};

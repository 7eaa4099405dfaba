mod overlay;
mod scene;

pub use overlay::{overlay_text, spawn_debug_overlay, update_debug_overlay_system};
pub use scene::{draw_ground_system, spawn_scene, sync_ball_sprite_system};

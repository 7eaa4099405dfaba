use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Edge length of the square ball sprite [px]
    pub ball_sprite_size: f32,
    /// Grey level applied to the ball sprite, 0..=1
    pub ball_shade: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Hello Chipmunk (World)".to_string(),
            screen_width: 800,
            screen_height: 600,
            ball_sprite_size: 5.0,
            ball_shade: 200.0 / 255.0,
        }
    }
}

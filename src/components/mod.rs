pub mod render;

pub use render::{BallSprite, DebugOverlay, GroundLine};

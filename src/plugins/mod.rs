mod physics;
mod render;
mod transformation;

pub use physics::{PhysicsPlugin, PhysicsSet};
pub use render::{RenderSet, SceneRenderPlugin};
pub use transformation::TransformationPlugin;

mod frames;

pub use frames::{Frame, ScreenTransform, TransformError};

mod stepper;

pub use stepper::{advance_frame, physics_step_system};

use bevy::prelude::Resource;

/// Whether the simulation still advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimPhase {
    #[default]
    Running,
    Frozen,
}

/// Accumulates simulated time in whole fixed steps.
///
/// Elapsed time is derived from the step count, so every tick adds exactly
/// one `step` and the step size cannot drift over the run.
#[derive(Resource, Debug, Clone)]
pub struct SimulationClock {
    step: f64,
    cutoff: f64,
    steps: u64,
}

impl SimulationClock {
    pub fn new(step: f64, cutoff: f64) -> Self {
        Self {
            step,
            cutoff,
            steps: 0,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds elapsed [s]
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.step
    }

    pub fn phase(&self) -> SimPhase {
        if self.elapsed() < self.cutoff {
            SimPhase::Running
        } else {
            SimPhase::Frozen
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase() == SimPhase::Running
    }

    /// Advance by one step if still running. Returns whether time advanced.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.steps += 1;
        true
    }
}

use shm_core::State;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Integrated over every sample of the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Position and velocity sequences aligned index-for-index with a time grid.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhaseTrajectory {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
}

impl PhaseTrajectory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            position: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, state: State) {
        self.position.push(state.position);
        self.velocity.push(state.velocity);
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.position.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Returns the state at sample `index`, if present.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<State> {
        Some(State::new(
            *self.position.get(index)?,
            *self.velocity.get(index)?,
        ))
    }
}

/// The result of an Euler integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Samples computed, including the initial condition at index 0.
    pub trajectory: PhaseTrajectory,

    /// Number of integration steps completed.
    pub steps: usize,
}

use shm_core::State;

/// Event emitted by the Euler solver for each sample.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The sample index on the time grid.
    pub step: usize,

    /// The sample time.
    pub time: f64,

    /// The state at this sample.
    pub state: State,
}

//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across solvers.
//!
//! # Example
//!
//! ```rust
//! use shm_core::Observer;
//! use shm_observers::traits::{CanStopEarly, HasState};
//!
//! struct StopAtRest {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for StopAtRest {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let state = event.state();
//!         (state.position.abs() < self.tolerance && state.velocity.abs() < self.tolerance)
//!             .then(A::stop_early)
//!     }
//! }
//! ```

use shm_core::State;
use shm_solvers::transient::euler;

/// An event that carries a sampled phase-space state.
pub trait HasState {
    /// Returns the sample index.
    fn step(&self) -> usize;

    /// Returns the sample time.
    fn time(&self) -> f64;

    /// Returns the state at this sample.
    fn state(&self) -> State;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasState for euler::Event {
    fn step(&self) -> usize {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn state(&self) -> State {
        self.state
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

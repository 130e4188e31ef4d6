//! Closed-form solutions.
//!
//! - [`shm`] — the ideal mass–spring oscillator with its energies
//! - [`pendulum_linear`] — the small-angle pendulum

mod pendulum;
mod spring;

pub use pendulum::{LinearPendulum, pendulum_linear};
pub use spring::{ShmTrajectory, shm};

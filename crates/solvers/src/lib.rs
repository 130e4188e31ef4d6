//! Solvers for classical oscillators.
//!
//! Every solver is a pure function from validated parameters and a shared
//! [`TimeGrid`] to sequences aligned index-for-index with that grid.
//!
//! # Modules
//!
//! - [`analytic`] — closed-form mass–spring and small-angle pendulum solutions
//! - [`transient`] — semi-implicit Euler integration of the nonlinear pendulum
//!   and the damped oscillator
//! - [`sweep`] — period across a range of stiffness or mass
//! - [`analysis`] — zero crossings, measured period, and instability checks
//!
//! [`TimeGrid`]: shm_core::TimeGrid

pub mod analysis;
pub mod analytic;
pub mod sweep;
pub mod transient;

pub use analytic::{pendulum_linear as analytic_pendulum_linear, shm as analytic_shm};
pub use sweep::period_sweep;
pub use transient::{damped::damped_oscillator, euler::integrate, pendulum::nonlinear_pendulum};

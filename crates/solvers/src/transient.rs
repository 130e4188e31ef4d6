//! Numerically integrated oscillators.
//!
//! - [`euler`] — the generic semi-implicit Euler stepper
//! - [`pendulum`] — the full nonlinear simple pendulum
//! - [`damped`] — the viscously damped mass–spring oscillator

pub mod damped;
pub mod euler;
pub mod pendulum;

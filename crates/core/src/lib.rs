//! Core types and traits for simulating classical oscillators.
//!
//! This crate defines the value types and abstractions that the solvers and
//! observers build on:
//!
//! - [`TimeGrid`] — an evenly spaced sample grid shared by every solver
//! - [`OscillatorParams`], [`PendulumParams`], [`DampedParams`] — validated,
//!   immutable parameter sets
//! - [`State`] and [`Acceleration`] — a phase-space state and the law of motion
//!   `ẍ = f(x, ẋ)` that steps it
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`InvalidArgument`] — the error returned by every validating constructor
//! - [`NumericalInstability`] — an advisory that a step size was too coarse

mod error;
mod grid;
mod instability;
mod observer;
mod params;
mod step;

pub use error::InvalidArgument;
pub use grid::{TimeGrid, build_time_grid};
pub use instability::NumericalInstability;
pub use observer::Observer;
pub use params::{DampedParams, DampingRegime, OscillatorParams, PendulumParams};
pub use step::{Acceleration, State};

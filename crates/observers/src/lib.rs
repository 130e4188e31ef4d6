//! Reusable observers for the oscillator solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! let observers work with solver events without naming a concrete solver.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver events and actions
//!   ([`HasState`], [`CanStopEarly`])
//! - [`AmplitudeGuard`] — surfaces a [`NumericalInstability`] while integrating
//!
//! [`Observer`]: shm_core::Observer
//! [`NumericalInstability`]: shm_core::NumericalInstability
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod amplitude;

pub use amplitude::AmplitudeGuard;

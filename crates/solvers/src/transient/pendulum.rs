use shm_core::{Acceleration, PendulumParams, State, TimeGrid};

use super::euler;

/// Restoring law of the full nonlinear pendulum: `θ̈ = -(g/L)·sin θ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonlinearPendulum {
    gravity_over_length: f64,
}

impl NonlinearPendulum {
    #[must_use]
    pub fn new(params: &PendulumParams) -> Self {
        Self {
            gravity_over_length: params.gravity() / params.length(),
        }
    }
}

impl Acceleration for NonlinearPendulum {
    fn acceleration(&self, theta: f64, _omega: f64) -> f64 {
        -self.gravity_over_length * theta.sin()
    }
}

/// Angle and angular velocity of a pendulum, aligned with a time grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PendulumTrajectory {
    /// Angle in radians.
    pub theta: Vec<f64>,
    /// Angular velocity in rad/s.
    pub omega: Vec<f64>,
}

impl PendulumTrajectory {
    /// Returns the angle in degrees.
    #[must_use]
    pub fn theta_degrees(&self) -> Vec<f64> {
        self.theta.iter().map(|theta| theta.to_degrees()).collect()
    }
}

/// Integrates the nonlinear pendulum released from rest at `θ₀`.
///
/// The result diverges from the small-angle solution as `θ₀` grows; that
/// divergence is the physics, not a numerical fault.
#[must_use]
pub fn nonlinear_pendulum(params: &PendulumParams, grid: &TimeGrid) -> PendulumTrajectory {
    let law = NonlinearPendulum::new(params);
    let euler::PhaseTrajectory { position, velocity } =
        euler::integrate(State::at_rest(params.theta0()), &law, grid);

    PendulumTrajectory {
        theta: position,
        omega: velocity,
    }
}

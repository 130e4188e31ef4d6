use shm_core::{PendulumParams, TimeGrid};

/// The small-angle pendulum solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinearPendulum {
    /// Angle in radians, aligned with the grid.
    pub theta: Vec<f64>,
    /// Period `2π·√(L/g)` in seconds.
    pub period: f64,
}

impl LinearPendulum {
    /// Returns the angle in degrees.
    #[must_use]
    pub fn theta_degrees(&self) -> Vec<f64> {
        self.theta.iter().map(|theta| theta.to_degrees()).collect()
    }
}

/// Evaluates `θ(t) = θ₀·cos(ωt)` with `ω = √(g/L)` on a grid.
#[must_use]
pub fn pendulum_linear(params: &PendulumParams, grid: &TimeGrid) -> LinearPendulum {
    let omega = params.omega();
    let theta0 = params.theta0();

    LinearPendulum {
        theta: grid.iter().map(|t| theta0 * (omega * t).cos()).collect(),
        period: params.linear_period(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn returns_to_initial_angle_after_one_period() {
        let params = PendulumParams::from_degrees(2.0, 9.81, 15.0).unwrap();
        let grid = TimeGrid::new(params.linear_period(), 101).unwrap();

        let out = pendulum_linear(&params, &grid);

        assert_relative_eq!(out.period, std::f64::consts::TAU * (2.0 / 9.81_f64).sqrt());
        assert_relative_eq!(out.theta[0], params.theta0());
        assert_relative_eq!(out.theta[100], params.theta0(), epsilon = 1e-12);
        assert_relative_eq!(out.theta[50], -params.theta0(), epsilon = 1e-12);
    }

    #[test]
    fn degrees_view() {
        let params = PendulumParams::from_degrees(1.0, 9.81, 30.0).unwrap();
        let grid = TimeGrid::new(1.0, 3).unwrap();

        let degrees = pendulum_linear(&params, &grid).theta_degrees();

        assert_eq!(degrees.len(), 3);
        assert_relative_eq!(degrees[0], 30.0, epsilon = 1e-12);
    }
}

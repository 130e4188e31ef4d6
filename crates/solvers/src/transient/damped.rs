use shm_core::{Acceleration, DampedParams, DampingRegime, State, TimeGrid};

use super::euler;

/// Restoring and damping law `ẍ = -2ζω₀ẋ - ω₀²x`.
///
/// The same law covers every damping regime; there is no branching on `ζ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampedOscillator {
    zeta: f64,
    omega0: f64,
}

impl DampedOscillator {
    #[must_use]
    pub fn new(params: &DampedParams) -> Self {
        Self {
            zeta: params.zeta(),
            omega0: params.omega0(),
        }
    }
}

impl Acceleration for DampedOscillator {
    fn acceleration(&self, x: f64, v: f64) -> f64 {
        -2.0 * self.zeta * self.omega0 * v - self.omega0 * self.omega0 * x
    }
}

/// Displacement and velocity of a damped oscillator, aligned with a time grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DampedTrajectory {
    pub x: Vec<f64>,
    pub v: Vec<f64>,
    pub regime: DampingRegime,
}

/// Integrates the damped oscillator released from rest at `x = A`.
#[must_use]
pub fn damped_oscillator(params: &DampedParams, grid: &TimeGrid) -> DampedTrajectory {
    let law = DampedOscillator::new(params);
    let regime = params.regime();
    tracing::debug!(zeta = params.zeta(), ?regime, "damped oscillator");

    let euler::PhaseTrajectory { position, velocity } =
        euler::integrate(State::at_rest(params.oscillator().amplitude()), &law, grid);

    DampedTrajectory {
        x: position,
        v: velocity,
        regime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use shm_core::OscillatorParams;

    use crate::{analysis, analytic};

    fn params(zeta: f64) -> DampedParams {
        let oscillator = OscillatorParams::new(100.0, 1.0, 0.2, 0.0).unwrap();
        DampedParams::new(oscillator, zeta).unwrap()
    }

    fn peak(values: &[f64]) -> f64 {
        values.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
    }

    #[test]
    fn starts_at_rest_at_amplitude() {
        let grid = TimeGrid::new(20.0, 1000).unwrap();

        let trajectory = damped_oscillator(&params(0.2), &grid);

        assert_eq!(trajectory.x.len(), grid.len());
        assert_eq!(trajectory.x[0], 0.2);
        assert_eq!(trajectory.v[0], 0.0);
        assert_eq!(trajectory.regime, DampingRegime::Underdamped);
    }

    #[test]
    fn undamped_matches_analytic_within_discretization_error() {
        let p = params(0.0);
        let deviation = |n: usize| {
            let grid = TimeGrid::new(2.0, n).unwrap();
            let numeric = damped_oscillator(&p, &grid);
            let exact = analytic::shm(p.oscillator(), &grid);
            numeric
                .x
                .iter()
                .zip(&exact.x)
                .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()))
        };

        let coarse = deviation(2_001);
        let fine = deviation(20_001);

        assert!(coarse < 0.02, "coarse deviation {coarse}");
        assert!(fine < coarse / 5.0, "refining dt should shrink the error");
    }

    #[test]
    fn underdamped_decays_with_oscillation() {
        let grid = TimeGrid::new(20.0, 20_000).unwrap();

        let trajectory = damped_oscillator(&params(0.2), &grid);

        assert!(analysis::zero_crossings(grid.as_slice(), &trajectory.x).len() > 2);
        let tail = &trajectory.x[trajectory.x.len() - 100..];
        assert!(peak(tail) < 0.2 * 1e-3);
    }

    #[test]
    fn critically_damped_decays_without_ringing() {
        let grid = TimeGrid::new(5.0, 10_000).unwrap();

        let trajectory = damped_oscillator(&params(1.0), &grid);

        assert_eq!(trajectory.regime, DampingRegime::CriticallyDamped);
        assert!(analysis::sign_changes_after_first_crossing(&trajectory.x) == 0);
        assert!(peak(&trajectory.x[1..]) <= 0.2);
    }

    #[test]
    fn overdamped_never_changes_sign_after_first_crossing() {
        let grid = TimeGrid::new(20.0, 1000).unwrap();

        let trajectory = damped_oscillator(&params(2.5), &grid);

        assert_eq!(trajectory.regime, DampingRegime::Overdamped);
        assert_eq!(analysis::sign_changes_after_first_crossing(&trajectory.x), 0);
        assert!(trajectory.x.iter().all(|x| *x >= 0.0));
    }

    #[test]
    fn acceleration_law() {
        let law = DampedOscillator::new(&params(0.5));

        // ω₀ = 10: a = -2 * 0.5 * 10 * v - 100 * x
        assert_relative_eq!(law.acceleration(0.1, 2.0), -20.0 - 10.0);
    }
}

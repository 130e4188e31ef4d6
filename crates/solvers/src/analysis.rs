//! Post-processing of sampled trajectories.
//!
//! These helpers measure properties of a trajectory after it has been
//! computed: where it crosses zero, the period those crossings imply, and
//! whether the numerical solution has escaped its physical bounds.

use shm_core::{NumericalInstability, TimeGrid};

/// A zero crossing located between two samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroCrossing {
    /// Crossing time, linearly interpolated between the bracketing samples.
    pub time: f64,
    /// `true` when the signal goes from negative to positive.
    pub rising: bool,
}

/// Finds every zero crossing of `signal` sampled at `time`.
///
/// A sample that is exactly zero ends a crossing; it does not start a new one.
///
/// # Panics
///
/// Panics if `time` and `signal` have different lengths.
#[must_use]
pub fn zero_crossings(time: &[f64], signal: &[f64]) -> Vec<ZeroCrossing> {
    assert_eq!(time.len(), signal.len(), "time and signal must be aligned");

    time.windows(2)
        .zip(signal.windows(2))
        .filter_map(|(t, s)| {
            let (a, b) = (s[0], s[1]);
            let falling = a > 0.0 && b <= 0.0;
            let rising = a < 0.0 && b >= 0.0;
            (falling || rising).then(|| ZeroCrossing {
                time: t[0] + (t[1] - t[0]) * a / (a - b),
                rising,
            })
        })
        .collect()
}

/// Measures the oscillation period from same-direction zero crossings.
///
/// Returns `None` if the signal crosses zero fewer than twice in the same
/// direction, as for an overdamped decay.
#[must_use]
pub fn measured_period(time: &[f64], signal: &[f64]) -> Option<f64> {
    let crossings = zero_crossings(time, signal);
    let direction = crossings.first()?.rising;
    let same: Vec<f64> = crossings
        .iter()
        .filter(|c| c.rising == direction)
        .map(|c| c.time)
        .collect();

    match same.as_slice() {
        [first, .., last] => Some((last - first) / (same.len() - 1) as f64),
        _ => None,
    }
}

/// Counts sign changes that occur after the first one.
///
/// Exact zeros carry no sign and are skipped. A monotonic decay that crosses
/// zero at most once returns `0`.
#[must_use]
pub fn sign_changes_after_first_crossing(signal: &[f64]) -> usize {
    let mut signs = signal
        .iter()
        .filter(|x| **x != 0.0)
        .map(|x| x.is_sign_positive());

    let Some(mut previous) = signs.next() else {
        return 0;
    };
    let mut changes = 0_usize;
    for sign in signs {
        if sign != previous {
            changes += 1;
            previous = sign;
        }
    }
    changes.saturating_sub(1)
}

/// Checks whether `|x|` ever exceeds `factor` times the initial amplitude.
///
/// Meant for undamped systems, whose exact motion never leaves `[-A, A]`.
/// Returns the first offending sample, if any, and logs it as a warning.
///
/// # Panics
///
/// Panics if `position` and `grid` have different lengths.
pub fn check_amplitude(
    grid: &TimeGrid,
    position: &[f64],
    amplitude: f64,
    factor: f64,
) -> Option<NumericalInstability> {
    assert_eq!(grid.len(), position.len(), "grid and position must be aligned");

    let limit = amplitude.abs() * factor;
    let (step, value) = position
        .iter()
        .copied()
        .enumerate()
        .find(|(_, x)| !x.is_finite() || x.abs() > limit)?;

    let instability = NumericalInstability {
        step,
        time: grid[step],
        value,
        limit,
    };
    tracing::warn!(%instability, "trajectory exceeded amplitude bound");
    Some(instability)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use shm_core::State;

    use crate::transient::euler;

    #[test]
    fn crossings_are_interpolated() {
        let time = [0.0, 1.0, 2.0, 3.0];
        let signal = [1.0, -1.0, -3.0, 1.0];

        let crossings = zero_crossings(&time, &signal);

        assert_eq!(crossings.len(), 2);
        assert_relative_eq!(crossings[0].time, 0.5);
        assert!(!crossings[0].rising);
        assert_relative_eq!(crossings[1].time, 2.75);
        assert!(crossings[1].rising);
    }

    #[test]
    fn exact_zero_counts_once() {
        let time = [0.0, 1.0, 2.0];
        let signal = [1.0, 0.0, -1.0];

        let crossings = zero_crossings(&time, &signal);

        assert_eq!(crossings.len(), 1);
        assert_relative_eq!(crossings[0].time, 1.0);
    }

    #[test]
    fn period_of_a_cosine() {
        let grid = TimeGrid::new(10.0, 10_001).unwrap();
        let omega = 3.0;
        let signal: Vec<f64> = grid.iter().map(|t| (omega * t).cos()).collect();

        let period = measured_period(grid.as_slice(), &signal).unwrap();

        assert_relative_eq!(period, std::f64::consts::TAU / omega, epsilon = 1e-6);
    }

    #[test]
    fn no_period_without_two_crossings() {
        let time = [0.0, 1.0, 2.0];

        assert_eq!(measured_period(&time, &[1.0, 0.5, 0.25]), None);
        assert_eq!(measured_period(&time, &[1.0, -0.5, -0.25]), None);
    }

    #[test]
    fn sign_changes_skip_the_first() {
        assert_eq!(sign_changes_after_first_crossing(&[1.0, 0.5, 0.1]), 0);
        assert_eq!(sign_changes_after_first_crossing(&[1.0, -0.5, -0.1]), 0);
        assert_eq!(sign_changes_after_first_crossing(&[1.0, -0.5, 0.0, 0.1]), 1);
        assert_eq!(sign_changes_after_first_crossing(&[0.0, 0.0]), 0);
        assert_eq!(sign_changes_after_first_crossing(&[1.0, -1.0, 1.0, -1.0]), 2);
    }

    #[test]
    fn stable_integration_passes_the_amplitude_check() {
        let grid = TimeGrid::new(20.0, 1000).unwrap();
        let spring = |x: f64, _v: f64| -100.0 * x;

        let trajectory = euler::integrate(State::at_rest(0.2), &spring, &grid);

        assert_eq!(check_amplitude(&grid, &trajectory.position, 0.2, 1.5), None);
    }

    #[test]
    fn coarse_step_trips_the_amplitude_check() {
        // ω·dt = 3 is beyond the semi-implicit Euler stability limit of 2.
        let grid = TimeGrid::new(30.0, 101).unwrap();
        let spring = |x: f64, _v: f64| -100.0 * x;

        let trajectory = euler::integrate(State::at_rest(0.2), &spring, &grid);
        let instability = check_amplitude(&grid, &trajectory.position, 0.2, 10.0).unwrap();

        assert!(instability.step > 0);
        assert_relative_eq!(instability.limit, 2.0);
        assert!(instability.value.abs() > 2.0);
        assert_relative_eq!(instability.time, grid[instability.step]);
    }

    #[test]
    #[should_panic(expected = "grid and position must be aligned")]
    fn amplitude_check_rejects_misaligned_position() {
        let grid = TimeGrid::new(1.0, 3).unwrap();
        let _ = check_amplitude(&grid, &[0.2, 0.1, 0.0, 5.0], 0.2, 1.5);
    }
}

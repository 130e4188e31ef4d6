//! Semi-implicit Euler solver for second-order ODEs.
//!
//! This module integrates `ẍ = f(x, ẋ)` over a [`TimeGrid`], updating the
//! velocity first and then advancing the position with the updated velocity:
//!
//! ```text
//! a_i     = f(x_i, v_i)
//! v_{i+1} = v_i + a_i * dt
//! x_{i+1} = x_i + v_{i+1} * dt
//! ```
//!
//! The step size is fixed by the grid. There is no error control, so accuracy
//! depends entirely on `dt`; refine the grid to reduce drift.
//!
//! # Example
//!
//! ```
//! use shm_core::{State, TimeGrid};
//! use shm_solvers::transient::euler;
//!
//! let grid = TimeGrid::new(10.0, 1001).unwrap();
//! let spring = |x: f64, _v: f64| -4.0 * x;
//!
//! let solution = euler::solve_unobserved(State::at_rest(1.0), &spring, &grid);
//!
//! assert_eq!(solution.trajectory.len(), grid.len());
//! ```
//!
//! [`TimeGrid`]: shm_core::TimeGrid

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{PhaseTrajectory, Solution, Status};

use shm_core::{Acceleration, Observer, State, TimeGrid};

/// Integrates a second-order ODE using semi-implicit Euler.
///
/// # Algorithm
///
/// 1. Record the initial state at sample 0 exactly as supplied.
/// 2. For each following sample, in increasing time order:
///    - Compute the acceleration from the current state.
///    - Update the velocity, then the position with the new velocity.
///    - Record the new state and emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with every computed sample.
///
/// # Observer
///
/// The observer receives an [`Event`] for every sample, including the initial
/// one, and may return [`Action::StopEarly`] to terminate the integration.
/// A stopped solution is shorter than the grid.
pub fn solve<A, Obs>(
    initial: State,
    acceleration: &A,
    grid: &TimeGrid,
    mut observer: Obs,
) -> Solution
where
    A: Acceleration + ?Sized,
    Obs: Observer<Event, Action>,
{
    let dt = grid.step();
    tracing::debug!(samples = grid.len(), dt, "semi-implicit euler");

    let mut trajectory = PhaseTrajectory::with_capacity(grid.len());
    trajectory.push(initial);

    let event = Event {
        step: 0,
        time: grid[0],
        state: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
        };
    }

    let mut current = initial;

    for step in 1..grid.len() {
        let next = current.step(acceleration, dt);
        trajectory.push(next);

        let event = Event {
            step,
            time: grid[step],
            state: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            tracing::debug!(step, "stopped by observer");
            return Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
            };
        }

        current = next;
    }

    Solution {
        status: Status::Complete,
        steps: grid.len() - 1,
        trajectory,
    }
}

/// Integrates a second-order ODE using semi-implicit Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events, so the
/// result always covers the whole grid.
pub fn solve_unobserved<A>(initial: State, acceleration: &A, grid: &TimeGrid) -> Solution
where
    A: Acceleration + ?Sized,
{
    solve(initial, acceleration, grid, ())
}

/// Integrates a second-order ODE and returns its position and velocity.
pub fn integrate<A>(initial: State, acceleration: &A, grid: &TimeGrid) -> PhaseTrajectory
where
    A: Acceleration + ?Sized,
{
    solve_unobserved(initial, acceleration, grid).trajectory
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn free(_x: f64, _v: f64) -> f64 {
        0.0
    }

    #[test]
    fn free_motion_is_exactly_inertial() {
        let grid = TimeGrid::new(4.0, 41).unwrap();
        let (x0, v0) = (1.5, -0.75);

        let trajectory = integrate(State::new(x0, v0), &free, &grid);

        assert_eq!(trajectory.len(), grid.len());
        for (i, t) in grid.iter().enumerate() {
            assert_relative_eq!(trajectory.position[i], x0 + v0 * t, epsilon = 1e-12);
            assert_relative_eq!(trajectory.velocity[i], v0);
        }
    }

    #[test]
    fn initial_condition_is_kept_exactly() {
        let grid = TimeGrid::new(1.0, 11).unwrap();
        let initial = State::new(0.123_456_789, 9.876_543_21);

        let trajectory = integrate(initial, &|x: f64, v: f64| -x - v, &grid);

        assert_eq!(trajectory.state(0), Some(initial));
    }

    #[test]
    fn velocity_is_updated_before_position() {
        let grid = TimeGrid::new(1.0, 2).unwrap();
        let gravity = |_x: f64, _v: f64| -10.0;

        let trajectory = integrate(State::at_rest(0.0), &gravity, &grid);

        // One step of dt = 1: v = -10, x = 0 + (-10) * 1.
        assert_relative_eq!(trajectory.velocity[1], -10.0);
        assert_relative_eq!(trajectory.position[1], -10.0);
    }

    #[test]
    fn harmonic_amplitude_stays_bounded() {
        let grid = TimeGrid::new(50.0, 5001).unwrap();
        let spring = |x: f64, _v: f64| -x;

        let trajectory = integrate(State::at_rest(1.0), &spring, &grid);

        let peak = trajectory
            .position
            .iter()
            .fold(0.0_f64, |acc, x| acc.max(x.abs()));
        assert!(peak < 1.01, "peak amplitude drifted to {peak}");
    }

    #[test]
    fn observer_can_stop_early() {
        let grid = TimeGrid::new(1.0, 101).unwrap();

        let observer = |event: &Event| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(State::new(0.0, 1.0), &free, &grid, observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.trajectory.len(), 6);
    }

    #[test]
    fn complete_solution_reports_every_step() {
        let grid = TimeGrid::new(1.0, 5).unwrap();

        let mut steps = Vec::new();
        let mut times = Vec::new();
        let solution = solve(State::new(0.0, 1.0), &free, &grid, |event: &Event| {
            steps.push(event.step);
            times.push(event.time);
            None
        });

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 4);
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
        assert_eq!(times, grid.as_slice());
    }
}

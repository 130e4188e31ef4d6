/// A phase-space state of a one-degree-of-freedom system.
///
/// `position` is a displacement or angle, `velocity` its time derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct State {
    pub position: f64,
    pub velocity: f64,
}

impl State {
    #[must_use]
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Returns a state at rest at `position`.
    #[must_use]
    pub fn at_rest(position: f64) -> Self {
        Self::new(position, 0.0)
    }

    /// Returns the state after one semi-implicit Euler step of size `dt`.
    ///
    /// Velocity is updated first and the updated velocity drives the position:
    ///
    /// ```text
    /// a      = f(x, v)
    /// v_next = v + a * dt
    /// x_next = x + v_next * dt
    /// ```
    #[must_use]
    pub fn step<A: Acceleration + ?Sized>(&self, acceleration: &A, dt: f64) -> Self {
        let a = acceleration.acceleration(self.position, self.velocity);
        let velocity = self.velocity + a * dt;
        let position = self.position + velocity * dt;
        Self { position, velocity }
    }
}

/// A second-order law of motion `ẍ = f(x, ẋ)`.
///
/// Anything that can compute an acceleration from position and velocity can
/// be integrated. Closures of the form `Fn(f64, f64) -> f64` implement this
/// trait directly.
pub trait Acceleration {
    /// Returns the acceleration at the given position and velocity.
    fn acceleration(&self, position: f64, velocity: f64) -> f64;
}

impl<F> Acceleration for F
where
    F: Fn(f64, f64) -> f64,
{
    fn acceleration(&self, position: f64, velocity: f64) -> f64 {
        self(position, velocity)
    }
}

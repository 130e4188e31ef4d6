//! Physical parameter sets for the supported oscillators.
//!
//! Each type validates its fields on construction and is immutable afterwards.
//! Derived quantities (angular frequency, period) are computed on demand.

use std::f64::consts::TAU;

use crate::error::{self, InvalidArgument};

/// Parameters of an ideal mass–spring oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OscillatorParams {
    stiffness: f64,
    mass: f64,
    amplitude: f64,
    phase: f64,
}

impl OscillatorParams {
    /// Creates oscillator parameters.
    ///
    /// `stiffness` is in N/m, `mass` in kg, `amplitude` in m and `phase` in
    /// radians.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if stiffness, mass, or amplitude is not
    /// positive, or if the phase is not finite.
    pub fn new(
        stiffness: f64,
        mass: f64,
        amplitude: f64,
        phase: f64,
    ) -> Result<Self, InvalidArgument> {
        Ok(Self {
            stiffness: error::positive("k", stiffness)?,
            mass: error::positive("m", mass)?,
            amplitude: error::positive("A", amplitude)?,
            phase: error::finite("phase", phase)?,
        })
    }

    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    #[must_use]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Returns the natural angular frequency `ω = √(k/m)`.
    #[must_use]
    pub fn omega(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Returns the period `T = 2π·√(m/k)`.
    #[must_use]
    pub fn period(&self) -> f64 {
        TAU / self.omega()
    }

    /// Returns the total mechanical energy `½kA²`.
    #[must_use]
    pub fn energy(&self) -> f64 {
        0.5 * self.stiffness * self.amplitude * self.amplitude
    }
}

/// Parameters of a simple pendulum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PendulumParams {
    length: f64,
    gravity: f64,
    theta0: f64,
}

impl PendulumParams {
    /// Creates pendulum parameters with the initial angle in radians.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if length or gravity is not positive, or if
    /// the initial angle is not finite.
    pub fn new(length: f64, gravity: f64, theta0: f64) -> Result<Self, InvalidArgument> {
        Ok(Self {
            length: error::positive("L", length)?,
            gravity: error::positive("g", gravity)?,
            theta0: error::finite("theta0", theta0)?,
        })
    }

    /// Creates pendulum parameters with the initial angle in degrees.
    ///
    /// # Errors
    ///
    /// Same as [`PendulumParams::new`].
    pub fn from_degrees(
        length: f64,
        gravity: f64,
        theta0_deg: f64,
    ) -> Result<Self, InvalidArgument> {
        Self::new(length, gravity, theta0_deg.to_radians())
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Returns the initial angle in radians.
    #[must_use]
    pub fn theta0(&self) -> f64 {
        self.theta0
    }

    /// Returns the small-angle angular frequency `ω = √(g/L)`.
    #[must_use]
    pub fn omega(&self) -> f64 {
        (self.gravity / self.length).sqrt()
    }

    /// Returns the small-angle period `T = 2π·√(L/g)`.
    #[must_use]
    pub fn linear_period(&self) -> f64 {
        TAU * (self.length / self.gravity).sqrt()
    }
}

/// Decay regime of a damped oscillator, classified by its damping ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DampingRegime {
    /// `ζ = 0`: no damping at all.
    Undamped,
    /// `0 < ζ < 1`: oscillatory decay.
    Underdamped,
    /// `ζ = 1`: fastest non-oscillatory decay.
    CriticallyDamped,
    /// `ζ > 1`: monotonic, slower decay.
    Overdamped,
}

/// Parameters of a damped mass–spring oscillator.
///
/// The oscillator is released from rest at `x = A`, so the phase of the inner
/// [`OscillatorParams`] is not used by the damped solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DampedParams {
    oscillator: OscillatorParams,
    zeta: f64,
}

impl DampedParams {
    /// Creates damped parameters from an oscillator and damping ratio `ζ`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `zeta` is negative or not finite.
    pub fn new(oscillator: OscillatorParams, zeta: f64) -> Result<Self, InvalidArgument> {
        Ok(Self {
            oscillator,
            zeta: error::non_negative("zeta", zeta)?,
        })
    }

    #[must_use]
    pub fn oscillator(&self) -> &OscillatorParams {
        &self.oscillator
    }

    #[must_use]
    pub fn zeta(&self) -> f64 {
        self.zeta
    }

    /// Returns the undamped natural frequency `ω₀ = √(k/m)`.
    #[must_use]
    pub fn omega0(&self) -> f64 {
        self.oscillator.omega()
    }

    /// Classifies the damping ratio.
    ///
    /// This is informational; the integration rule is the same in every regime.
    #[must_use]
    pub fn regime(&self) -> DampingRegime {
        match self.zeta {
            z if z == 0.0 => DampingRegime::Undamped,
            z if z < 1.0 => DampingRegime::Underdamped,
            z if z == 1.0 => DampingRegime::CriticallyDamped,
            _ => DampingRegime::Overdamped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn oscillator_derived_quantities() {
        let params = OscillatorParams::new(100.0, 1.0, 0.2, 0.0).unwrap();

        assert_relative_eq!(params.omega(), 10.0);
        assert_relative_eq!(params.period(), TAU / 10.0);
        assert_relative_eq!(params.energy(), 2.0);
    }

    #[test]
    fn oscillator_rejects_non_positive_fields() {
        assert!(matches!(
            OscillatorParams::new(0.0, 1.0, 0.2, 0.0),
            Err(InvalidArgument::NonPositive { name: "k", .. })
        ));
        assert!(matches!(
            OscillatorParams::new(10.0, -1.0, 0.2, 0.0),
            Err(InvalidArgument::NonPositive { name: "m", .. })
        ));
        assert!(matches!(
            OscillatorParams::new(10.0, 1.0, 0.0, 0.0),
            Err(InvalidArgument::NonPositive { name: "A", .. })
        ));
        assert!(matches!(
            OscillatorParams::new(10.0, 1.0, 0.1, f64::NAN),
            Err(InvalidArgument::NonFinite { name: "phase", .. })
        ));
    }

    #[test]
    fn oscillator_accepts_any_finite_phase() {
        assert!(OscillatorParams::new(10.0, 1.0, 0.1, -7.0).is_ok());
    }

    #[test]
    fn pendulum_from_degrees() {
        let params = PendulumParams::from_degrees(1.0, 9.81, 90.0).unwrap();

        assert_relative_eq!(params.theta0(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(params.omega(), 9.81_f64.sqrt());
        assert_relative_eq!(params.linear_period(), TAU / 9.81_f64.sqrt());
    }

    #[test]
    fn pendulum_rejects_non_positive_length_and_gravity() {
        assert!(PendulumParams::new(0.0, 9.81, 0.1).is_err());
        assert!(PendulumParams::new(1.0, -9.81, 0.1).is_err());
    }

    #[test]
    fn damping_regimes() {
        let osc = OscillatorParams::new(100.0, 1.0, 0.2, 0.0).unwrap();
        let regime = |zeta| DampedParams::new(osc, zeta).unwrap().regime();

        assert_eq!(regime(0.0), DampingRegime::Undamped);
        assert_eq!(regime(0.2), DampingRegime::Underdamped);
        assert_eq!(regime(1.0), DampingRegime::CriticallyDamped);
        assert_eq!(regime(2.5), DampingRegime::Overdamped);
    }

    #[test]
    fn damping_ratio_must_be_non_negative() {
        let osc = OscillatorParams::new(100.0, 1.0, 0.2, 0.0).unwrap();
        assert!(matches!(
            DampedParams::new(osc, -0.5),
            Err(InvalidArgument::Negative { name: "zeta", .. })
        ));
    }
}

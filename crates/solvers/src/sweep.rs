//! Period of the ideal mass–spring oscillator across a parameter range.
//!
//! One parameter is held fixed while the other is swept over an evenly spaced
//! range, evaluating `T = 2π·√(m/k)` at each value.

use std::f64::consts::TAU;

use shm_core::InvalidArgument;

/// Which parameter is swept, carrying the value of the one held fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SweepMode {
    /// Sweep the stiffness `k` in N/m with the mass fixed.
    VaryStiffness { mass: f64 },
    /// Sweep the mass `m` in kg with the stiffness fixed.
    VaryMass { stiffness: f64 },
}

impl SweepMode {
    /// Returns the name of the swept parameter.
    #[must_use]
    pub fn swept(&self) -> &'static str {
        match self {
            Self::VaryStiffness { .. } => "k",
            Self::VaryMass { .. } => "m",
        }
    }

    fn fixed(&self) -> (&'static str, f64) {
        match *self {
            Self::VaryStiffness { mass } => ("m", mass),
            Self::VaryMass { stiffness } => ("k", stiffness),
        }
    }

    fn period(&self, value: f64) -> f64 {
        match *self {
            Self::VaryStiffness { mass } => TAU * (mass / value).sqrt(),
            Self::VaryMass { stiffness } => TAU * (value / stiffness).sqrt(),
        }
    }
}

/// An evenly spaced, inclusive range of parameter values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepRange {
    min: f64,
    max: f64,
    samples: usize,
}

impl SweepRange {
    /// Number of samples used by [`SweepRange::with_default_samples`].
    pub const DEFAULT_SAMPLES: usize = 100;

    /// Creates a range of `samples` values over `[min, max]`.
    ///
    /// A range with `min == max` collapses to a single value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `min` is not positive, `max < min`,
    /// either bound is not finite, `samples < 2`, or the range is too narrow
    /// relative to `min` for `samples` distinct `f64` values.
    pub fn new(min: f64, max: f64, samples: usize) -> Result<Self, InvalidArgument> {
        for (name, value) in [("range min", min), ("range max", max)] {
            if !value.is_finite() {
                return Err(InvalidArgument::NonFinite { name, value });
            }
        }
        if min <= 0.0 {
            return Err(InvalidArgument::NonPositive {
                name: "range min",
                value: min,
            });
        }
        if max < min {
            return Err(InvalidArgument::InvertedRange {
                name: "sweep",
                min,
                max,
            });
        }
        if samples < 2 {
            return Err(InvalidArgument::TooFewSamples { n: samples });
        }

        let range = Self { min, max, samples };
        if range.values().windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(InvalidArgument::Unresolvable {
                name: "sweep",
                samples,
            });
        }
        Ok(range)
    }

    /// Creates a range with [`Self::DEFAULT_SAMPLES`] values.
    ///
    /// # Errors
    ///
    /// Same as [`SweepRange::new`].
    pub fn with_default_samples(min: f64, max: f64) -> Result<Self, InvalidArgument> {
        Self::new(min, max, Self::DEFAULT_SAMPLES)
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the swept values in increasing order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        if self.min == self.max {
            return vec![self.min];
        }

        let last = self.samples - 1;
        let width = self.max - self.min;
        let mut values: Vec<f64> = (0..self.samples)
            .map(|i| self.min + width * i as f64 / last as f64)
            .collect();
        values[last] = self.max;
        values
    }
}

/// A swept parameter value and the period it produces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepPoint {
    pub value: f64,
    pub period: f64,
}

/// The period evaluated across a sweep, ordered by increasing parameter value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult {
    pub mode: SweepMode,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    #[must_use]
    pub fn periods(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.period).collect()
    }
}

/// Evaluates the period over `range` with the other parameter fixed by `mode`.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if the fixed parameter is not positive and
/// finite.
pub fn period_sweep(mode: SweepMode, range: &SweepRange) -> Result<SweepResult, InvalidArgument> {
    let (name, value) = mode.fixed();
    if !value.is_finite() {
        return Err(InvalidArgument::NonFinite { name, value });
    }
    if value <= 0.0 {
        return Err(InvalidArgument::NonPositive { name, value });
    }

    let points = range
        .values()
        .into_iter()
        .map(|value| SweepPoint {
            value,
            period: mode.period(value),
        })
        .collect();

    Ok(SweepResult { mode, points })
}

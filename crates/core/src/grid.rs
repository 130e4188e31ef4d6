use std::ops::Index;

use crate::error::{self, InvalidArgument};

/// An evenly spaced, strictly increasing sequence of time samples.
///
/// The grid runs from `0` to `t_max` inclusive, so `n` samples are separated
/// by `t_max / (n - 1)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeGrid {
    samples: Vec<f64>,
    step: f64,
}

impl TimeGrid {
    /// Builds a grid of `n` samples spanning `[0, t_max]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `t_max` is not positive and finite, if
    /// `n < 2`, or if `t_max` is so small that `n` samples would not be
    /// distinct in `f64`.
    pub fn new(t_max: f64, n: usize) -> Result<Self, InvalidArgument> {
        let t_max = error::positive("t_max", t_max)?;
        if n < 2 {
            return Err(InvalidArgument::TooFewSamples { n });
        }

        let step = t_max / (n - 1) as f64;
        let mut samples: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();

        // Pin the endpoint so accumulated rounding never moves it.
        samples[n - 1] = t_max;

        if step <= 0.0 || samples.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(InvalidArgument::Unresolvable {
                name: "t_max",
                samples: n,
            });
        }

        Ok(Self { samples, step })
    }

    /// Returns the uniform spacing between consecutive samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the final sample time.
    #[must_use]
    pub fn t_max(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; a valid grid holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }
}

impl Index<usize> for TimeGrid {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a TimeGrid {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Builds the sample times for a grid of `n` points over `[0, t_max]`.
///
/// # Errors
///
/// Returns [`InvalidArgument`] under the same conditions as [`TimeGrid::new`].
pub fn build_time_grid(t_max: f64, n: usize) -> Result<Vec<f64>, InvalidArgument> {
    TimeGrid::new(t_max, n).map(|grid| grid.samples)
}

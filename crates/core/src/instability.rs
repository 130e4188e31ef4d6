use std::fmt;

/// An advisory that an integrated trajectory left its physical bounds.
///
/// For an undamped system released with amplitude `A`, `|x|` should never
/// grow far beyond `A`. When it does, the step size is too coarse for the
/// dynamics. This is reported to the caller, never corrected automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumericalInstability {
    /// Sample index where the bound was first exceeded.
    pub step: usize,
    /// Sample time where the bound was first exceeded.
    pub time: f64,
    /// The offending position value.
    pub value: f64,
    /// The bound that was exceeded.
    pub limit: f64,
}

impl fmt::Display for NumericalInstability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "|x| = {} exceeds {} at t = {} (step {}); reduce the time step",
            self.value.abs(),
            self.limit,
            self.time,
            self.step
        )
    }
}

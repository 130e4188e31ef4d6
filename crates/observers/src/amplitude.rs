use shm_core::{NumericalInstability, Observer};

use crate::traits::{CanStopEarly, HasState};

/// Watches an integration for positions that escape `factor · A`.
///
/// The first sample whose position is non-finite or exceeds the limit is
/// recorded as a [`NumericalInstability`]. By default the guard only records;
/// with [`AmplitudeGuard::stop_on_trip`] it also stops the solver.
///
/// Intended for undamped systems, where the exact motion stays within `[-A, A]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeGuard {
    limit: f64,
    stop: bool,
    tripped: Option<NumericalInstability>,
}

impl AmplitudeGuard {
    /// Creates a guard that trips when `|x| > factor · |amplitude|`.
    #[must_use]
    pub fn new(amplitude: f64, factor: f64) -> Self {
        Self {
            limit: amplitude.abs() * factor,
            stop: false,
            tripped: None,
        }
    }

    /// Makes the guard stop the solver when it trips.
    #[must_use]
    pub fn stop_on_trip(mut self) -> Self {
        self.stop = true;
        self
    }

    #[must_use]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Returns the first instability seen, if any.
    #[must_use]
    pub fn instability(&self) -> Option<NumericalInstability> {
        self.tripped
    }
}

impl<E: HasState, A: CanStopEarly> Observer<E, A> for &mut AmplitudeGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.tripped.is_some() {
            return None;
        }

        let value = event.state().position;
        if value.is_finite() && value.abs() <= self.limit {
            return None;
        }

        let instability = NumericalInstability {
            step: event.step(),
            time: event.time(),
            value,
            limit: self.limit,
        };
        tracing::warn!(%instability, "amplitude guard tripped");
        self.tripped = Some(instability);

        self.stop.then(A::stop_early)
    }
}

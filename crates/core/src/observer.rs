/// Watches a solver as it advances and may steer it.
///
/// Each solver defines its own event type `E` (what it reports per sample)
/// and action type `A` (what an observer may ask of it).
pub trait Observer<E, A> {
    /// Inspects one event, returning an action to apply or `None` to continue.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_observer_counts_events() {
        let mut seen = 0;
        let mut observer = |event: &usize| {
            seen += event;
            (seen > 2).then_some("stop")
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some("stop"));
    }

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        assert_eq!(Observer::<u8, ()>::observe(&mut observer, &7), None);
    }
}

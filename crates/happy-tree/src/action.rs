//! Leaf action nodes.

use std::fmt;

use crate::Status;

type ActionFn<C> = Box<dyn FnMut(&C) -> Status>;

/// Leaf node running a caller-supplied function.
///
/// The function is invoked exactly once per tick and its result is returned
/// unchanged. Side effects are up to the function; a panic inside it unwinds
/// straight through the tree to whoever called `tick`.
pub struct Action<C> {
    f: ActionFn<C>,
}

impl<C> Action<C> {
    /// Wraps `f` as a leaf node.
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&C) -> Status + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Wraps a predicate: `true` maps to `Success`, `false` to `Failure`.
    pub fn condition<P>(mut predicate: P) -> Self
    where
        P: FnMut(&C) -> bool + 'static,
    {
        Self::new(move |ctx| Status::from(predicate(ctx)))
    }

    /// Runs the wrapped function against `ctx`.
    #[inline]
    pub fn tick(&mut self, ctx: &C) -> Status {
        (self.f)(ctx)
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::TimeData;

    #[test]
    fn runs_function_once_per_tick() {
        let time = TimeData::new(0.016);
        let calls = Rc::new(Cell::new(0));

        let seen = Rc::clone(&calls);
        let mut action = Action::new(move |t: &TimeData| {
            assert_eq!(*t, TimeData::new(0.016));
            seen.set(seen.get() + 1);
            Status::Running
        });

        assert_eq!(action.tick(&time), Status::Running);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn closure_state_persists_between_ticks() {
        let mut remaining = 2;
        let mut countdown = Action::new(move |_: &TimeData| {
            if remaining == 0 {
                return Status::Success;
            }
            remaining -= 1;
            Status::Running
        });

        let time = TimeData::default();
        assert_eq!(countdown.tick(&time), Status::Running);
        assert_eq!(countdown.tick(&time), Status::Running);
        assert_eq!(countdown.tick(&time), Status::Success);
    }

    #[test]
    fn condition_maps_bool_to_status() {
        let mut is_slow = Action::condition(|t: &TimeData| t.delta_time > 0.1);
        assert_eq!(is_slow.tick(&TimeData::new(0.5)), Status::Success);
        assert_eq!(is_slow.tick(&TimeData::new(0.05)), Status::Failure);
    }

    #[test]
    #[should_panic(expected = "leaf blew up")]
    fn panics_are_not_caught() {
        let mut action = Action::new(|_: &TimeData| panic!("leaf blew up"));
        action.tick(&TimeData::default());
    }
}

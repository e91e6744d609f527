//! Decorator nodes.
//!
//! Decorators wrap a single child and modify its result. This module
//! provides [`Inverter`] (NOT logic).

use std::fmt;

use crate::{Node, NodeKind, Result, Status, TreeError};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
///
/// An inverter may be created empty and receive its child later through
/// [`add_child`](Self::add_child), which is what the builder does. Ticking
/// it before then is an error.
pub struct Inverter<C> {
    child: Option<Box<Node<C>>>,
}

impl<C> Inverter<C> {
    /// Creates an inverter with no child attached yet.
    pub fn new() -> Self {
        Self { child: None }
    }

    /// Creates an inverter that wraps the given child.
    pub fn with_child(child: Node<C>) -> Self {
        Self {
            child: Some(Box::new(child)),
        }
    }

    /// Attaches the child.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ArityViolation`] if a child is already attached.
    /// The existing child is left in place.
    pub fn add_child(&mut self, child: Node<C>) -> Result<()> {
        if self.child.is_some() {
            return Err(TreeError::ArityViolation {
                kind: NodeKind::Inverter,
                max: 1,
            });
        }
        self.child = Some(Box::new(child));
        Ok(())
    }

    /// Returns `true` once a child has been attached.
    #[inline]
    pub fn has_child(&self) -> bool {
        self.child.is_some()
    }

    pub fn tick(&mut self, ctx: &C) -> Result<Status> {
        let child = self.child.as_mut().ok_or(TreeError::MissingChild {
            kind: NodeKind::Inverter,
        })?;
        Ok(child.tick(ctx)?.invert())
    }
}

impl<C> Default for Inverter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Inverter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inverter").field("child", &self.child).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::TimeData;

    /// Leaf returning a fixed status and counting how often it ran.
    fn probe(status: Status, calls: &Rc<Cell<u32>>) -> Node {
        let calls = Rc::clone(calls);
        Node::action(move |_| {
            calls.set(calls.get() + 1);
            status
        })
    }

    #[test]
    fn ticking_with_no_child_fails() {
        let mut inverter: Inverter<TimeData> = Inverter::new();
        assert_eq!(
            inverter.tick(&TimeData::default()),
            Err(TreeError::MissingChild {
                kind: NodeKind::Inverter
            })
        );
    }

    #[test]
    fn inverts_success_of_child() {
        let calls = Rc::new(Cell::new(0));
        let mut inverter = Inverter::with_child(probe(Status::Success, &calls));

        assert_eq!(inverter.tick(&TimeData::default()), Ok(Status::Failure));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn inverts_failure_of_child() {
        let calls = Rc::new(Cell::new(0));
        let mut inverter = Inverter::new();
        inverter.add_child(probe(Status::Failure, &calls)).unwrap();

        assert_eq!(inverter.tick(&TimeData::default()), Ok(Status::Success));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn passes_running_through() {
        let calls = Rc::new(Cell::new(0));
        let mut inverter = Inverter::with_child(probe(Status::Running, &calls));

        assert_eq!(inverter.tick(&TimeData::default()), Ok(Status::Running));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn adding_a_second_child_fails() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut inverter = Inverter::new();
        inverter.add_child(probe(Status::Success, &first)).unwrap();

        let err = inverter.add_child(probe(Status::Failure, &second)).unwrap_err();
        assert!(matches!(err, TreeError::ArityViolation { max: 1, .. }));

        inverter.tick(&TimeData::default()).unwrap();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn double_inversion_restores_status() {
        let calls = Rc::new(Cell::new(0));
        let inner = Inverter::with_child(probe(Status::Success, &calls));
        let mut outer = Inverter::with_child(Node::Inverter(inner));

        assert_eq!(outer.tick(&TimeData::default()), Ok(Status::Success));
    }
}

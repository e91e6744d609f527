//! The node type and its tick dispatch.
//!
//! This module defines [`Node`], the closed set of node variants a tree is
//! built from. Each variant owns its children outright, so a tree can only
//! ever be a tree: no node is shared, and no node can reach itself.
//!
//! The enum is generic over a context type `C` that is handed unchanged to
//! every node visited during one tick. It defaults to [`TimeData`].

use std::fmt;

use crate::{Action, Inverter, Parallel, Result, Selector, Sequence, Status, TimeData, TreeError};

/// A behaviour tree node that can be ticked against a context.
pub enum Node<C = TimeData> {
    /// Leaf wrapping a caller-supplied function.
    Action(Action<C>),
    /// Decorator inverting its single child.
    Inverter(Inverter<C>),
    /// Composite that succeeds when every child succeeds.
    Sequence(Sequence<C>),
    /// Composite that succeeds when any child succeeds.
    Selector(Selector<C>),
    /// Composite that ticks every child and classifies the counts.
    Parallel(Parallel<C>),
    /// A previously built tree attached as-is beneath another parent.
    Subtree(Box<Node<C>>),
}

/// Discriminant of a [`Node`], used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Action,
    Inverter,
    Sequence,
    Selector,
    Parallel,
    Subtree,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Action => "Action",
            NodeKind::Inverter => "Inverter",
            NodeKind::Sequence => "Sequence",
            NodeKind::Selector => "Selector",
            NodeKind::Parallel => "Parallel",
            NodeKind::Subtree => "Subtree",
        };
        write!(f, "{}", label)
    }
}

impl<C> Node<C> {
    /// Creates an action leaf.
    ///
    /// Shorthand for `Node::from(Action::new(f))`.
    #[inline]
    pub fn action<F>(f: F) -> Self
    where
        F: FnMut(&C) -> Status + 'static,
    {
        Node::Action(Action::new(f))
    }

    /// Creates an action leaf from a predicate.
    ///
    /// Shorthand for `Node::from(Action::condition(predicate))`.
    #[inline]
    pub fn condition<P>(predicate: P) -> Self
    where
        P: FnMut(&C) -> bool + 'static,
    {
        Node::Action(Action::condition(predicate))
    }

    /// Returns the variant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Action(_) => NodeKind::Action,
            Node::Inverter(_) => NodeKind::Inverter,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Selector(_) => NodeKind::Selector,
            Node::Parallel(_) => NodeKind::Parallel,
            Node::Subtree(_) => NodeKind::Subtree,
        }
    }

    /// Evaluates this node, and transitively its children, against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingChild`] if an [`Inverter`] anywhere below
    /// this node is ticked before its child was attached. The tick stops at
    /// that point; children already ticked keep their side effects.
    pub fn tick(&mut self, ctx: &C) -> Result<Status> {
        let status = match self {
            Node::Action(action) => action.tick(ctx),
            Node::Inverter(inverter) => inverter.tick(ctx)?,
            Node::Sequence(sequence) => sequence.tick(ctx)?,
            Node::Selector(selector) => selector.tick(ctx)?,
            Node::Parallel(parallel) => parallel.tick(ctx)?,
            Node::Subtree(root) => root.tick(ctx)?,
        };
        tracing::trace!(kind = %self.kind(), ?status, "ticked node");
        Ok(status)
    }

    /// Attaches `child` as the last child of this node.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotAParent`] for actions and spliced subtrees.
    /// - [`TreeError::ArityViolation`] if this is an [`Inverter`] that
    ///   already has its child. The existing child is kept.
    pub fn add_child(&mut self, child: Node<C>) -> Result<()> {
        match self {
            Node::Inverter(inverter) => inverter.add_child(child),
            Node::Sequence(sequence) => {
                sequence.push(child);
                Ok(())
            }
            Node::Selector(selector) => {
                selector.push(child);
                Ok(())
            }
            Node::Parallel(parallel) => {
                parallel.push(child);
                Ok(())
            }
            Node::Action(_) | Node::Subtree(_) => Err(TreeError::NotAParent { kind: self.kind() }),
        }
    }

    /// Checks that [`add_child`](Self::add_child) would accept one more child
    /// right now, returning the error it would raise otherwise.
    pub fn ensure_accepts_child(&self) -> Result<()> {
        match self {
            Node::Inverter(inverter) if inverter.has_child() => Err(TreeError::ArityViolation {
                kind: NodeKind::Inverter,
                max: 1,
            }),
            Node::Inverter(_) | Node::Sequence(_) | Node::Selector(_) | Node::Parallel(_) => Ok(()),
            Node::Action(_) | Node::Subtree(_) => Err(TreeError::NotAParent { kind: self.kind() }),
        }
    }

    /// Returns `true` if [`add_child`](Self::add_child) would accept one more
    /// child right now.
    #[inline]
    pub fn accepts_child(&self) -> bool {
        self.ensure_accepts_child().is_ok()
    }

    /// Maximum number of children this node can hold, `None` if unbounded.
    pub fn max_children(&self) -> Option<usize> {
        match self {
            Node::Inverter(_) => Some(1),
            Node::Sequence(_) | Node::Selector(_) | Node::Parallel(_) => None,
            Node::Action(_) | Node::Subtree(_) => Some(0),
        }
    }

    /// Number of children directly attached to this node.
    ///
    /// A spliced subtree counts as a single child holding its root.
    pub fn child_count(&self) -> usize {
        match self {
            Node::Action(_) => 0,
            Node::Inverter(inverter) => usize::from(inverter.has_child()),
            Node::Sequence(sequence) => sequence.len(),
            Node::Selector(selector) => selector.len(),
            Node::Parallel(parallel) => parallel.len(),
            Node::Subtree(_) => 1,
        }
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Action(action) => fmt::Debug::fmt(action, f),
            Node::Inverter(inverter) => fmt::Debug::fmt(inverter, f),
            Node::Sequence(sequence) => fmt::Debug::fmt(sequence, f),
            Node::Selector(selector) => fmt::Debug::fmt(selector, f),
            Node::Parallel(parallel) => fmt::Debug::fmt(parallel, f),
            Node::Subtree(root) => f.debug_tuple("Subtree").field(root).finish(),
        }
    }
}

impl<C> From<Action<C>> for Node<C> {
    fn from(action: Action<C>) -> Self {
        Node::Action(action)
    }
}

impl<C> From<Inverter<C>> for Node<C> {
    fn from(inverter: Inverter<C>) -> Self {
        Node::Inverter(inverter)
    }
}

impl<C> From<Sequence<C>> for Node<C> {
    fn from(sequence: Sequence<C>) -> Self {
        Node::Sequence(sequence)
    }
}

impl<C> From<Selector<C>> for Node<C> {
    fn from(selector: Selector<C>) -> Self {
        Node::Selector(selector)
    }
}

impl<C> From<Parallel<C>> for Node<C> {
    fn from(parallel: Parallel<C>) -> Self {
        Node::Parallel(parallel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParallelPolicy;

    #[test]
    fn leaves_reject_children() {
        let mut leaf: Node = Node::action(|_| Status::Success);
        let err = leaf.add_child(Node::action(|_| Status::Success)).unwrap_err();
        assert_eq!(err, TreeError::NotAParent { kind: NodeKind::Action });
        assert!(!leaf.accepts_child());
        assert_eq!(leaf.max_children(), Some(0));
    }

    #[test]
    fn subtree_rejects_children() {
        let mut spliced: Node = Node::Subtree(Box::new(Node::Sequence(Sequence::new(Vec::new()))));
        let err = spliced.add_child(Node::action(|_| Status::Success)).unwrap_err();
        assert_eq!(err, TreeError::NotAParent { kind: NodeKind::Subtree });
    }

    #[test]
    fn inverter_accepts_exactly_one_child() {
        let mut node: Node = Node::Inverter(Inverter::new());
        assert!(node.accepts_child());
        node.add_child(Node::action(|_| Status::Success)).unwrap();
        assert!(!node.accepts_child());
        assert_eq!(node.child_count(), 1);

        let err = node.add_child(Node::action(|_| Status::Failure)).unwrap_err();
        assert_eq!(
            err,
            TreeError::ArityViolation {
                kind: NodeKind::Inverter,
                max: 1
            }
        );
        // The first child is still the one being inverted.
        assert_eq!(node.tick(&TimeData::default()), Ok(Status::Failure));
    }

    #[test]
    fn composites_keep_insertion_order() {
        let mut node: Node = Node::Parallel(Parallel::new(ParallelPolicy::new(0, 0), Vec::new()));
        for _ in 0..3 {
            node.add_child(Node::action(|_| Status::Running)).unwrap();
        }
        assert_eq!(node.child_count(), 3);
        assert_eq!(node.max_children(), None);
    }

    #[test]
    fn subtree_delegates_to_root() {
        let mut node: Node = Node::Subtree(Box::new(Node::condition(|t: &TimeData| t.delta_time > 0.5)));
        assert_eq!(node.tick(&TimeData::new(1.0)), Ok(Status::Success));
        assert_eq!(node.tick(&TimeData::new(0.1)), Ok(Status::Failure));
    }

    #[test]
    fn missing_child_propagates_through_parents() {
        let mut node: Node = Node::Sequence(Sequence::new(vec![Node::Inverter(Inverter::new())]));
        assert_eq!(
            node.tick(&TimeData::default()),
            Err(TreeError::MissingChild {
                kind: NodeKind::Inverter
            })
        );
    }

    #[test]
    fn kind_labels() {
        assert_eq!(NodeKind::Parallel.to_string(), "Parallel");
        assert_eq!(NodeKind::Subtree.to_string(), "Subtree");
    }
}

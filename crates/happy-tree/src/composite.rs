//! Composite nodes.
//!
//! Composite nodes control the evaluation of several children. This module
//! provides [`Sequence`] (AND logic), [`Selector`] (OR logic) and
//! [`Parallel`] (threshold voting over every child).
//!
//! Children are ticked in insertion order. That order is fixed once a child
//! is attached.

use std::fmt;

use crate::{Node, Result, Status};

/// Ticks children in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure` or `Running`, the sequence **stops
///   immediately** and returns that status
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// An empty sequence succeeds. This is analogous to a short-circuited
/// logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given children.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self { children }
    }

    /// Appends a child after the existing ones.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn tick(&mut self, ctx: &C) -> Result<Status> {
        for child in &mut self.children {
            match child.tick(ctx)? {
                Status::Success => continue,
                other => return Ok(other), // Short-circuit
            }
        }
        Ok(Status::Success)
    }
}

/// Ticks children in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops
///   immediately** and returns that status
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// An empty selector fails. This is analogous to a short-circuited logical
/// OR (||) operation.
pub struct Selector<C> {
    children: Vec<Node<C>>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given children.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self { children }
    }

    /// Appends a child after the existing ones.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn tick(&mut self, ctx: &C) -> Result<Status> {
        for child in &mut self.children {
            match child.tick(ctx)? {
                Status::Failure => continue,
                other => return Ok(other), // Short-circuit
            }
        }
        Ok(Status::Failure)
    }
}

/// Termination thresholds of a [`Parallel`] node.
///
/// A threshold of `0` disables that outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelPolicy {
    /// Number of failed children that makes the node fail.
    pub required_to_fail: usize,
    /// Number of successful children that makes the node succeed.
    pub required_to_succeed: usize,
}

impl ParallelPolicy {
    pub const fn new(required_to_fail: usize, required_to_succeed: usize) -> Self {
        Self {
            required_to_fail,
            required_to_succeed,
        }
    }

    /// Classifies the counts collected over one tick.
    ///
    /// Success is checked first, so it wins when both thresholds are met.
    pub fn resolve(&self, succeeded: usize, failed: usize) -> Status {
        if self.required_to_succeed > 0 && succeeded >= self.required_to_succeed {
            return Status::Success;
        }
        if self.required_to_fail > 0 && failed >= self.required_to_fail {
            return Status::Failure;
        }
        Status::Running
    }
}

/// Ticks every child, then decides from how many succeeded or failed.
///
/// # Semantics
///
/// - **All** children are ticked on every call, in order, even when the
///   outcome is already settled. There is no short-circuit.
/// - Children returning `Running` count towards neither threshold.
/// - The outcome is picked by [`ParallelPolicy::resolve`].
///
/// "Parallel" is a logical policy: children run one after another on the
/// caller's stack, never on separate threads.
pub struct Parallel<C> {
    policy: ParallelPolicy,
    children: Vec<Node<C>>,
}

impl<C> Parallel<C> {
    /// Creates a new parallel node with the given thresholds and children.
    pub fn new(policy: ParallelPolicy, children: Vec<Node<C>>) -> Self {
        Self { policy, children }
    }

    pub fn policy(&self) -> ParallelPolicy {
        self.policy
    }

    /// Appends a child after the existing ones.
    pub fn push(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn tick(&mut self, ctx: &C) -> Result<Status> {
        let mut succeeded = 0;
        let mut failed = 0;

        for child in &mut self.children {
            match child.tick(ctx)? {
                Status::Success => succeeded += 1,
                Status::Failure => failed += 1,
                Status::Running => {}
            }
        }

        Ok(self.policy.resolve(succeeded, failed))
    }
}

impl<C> fmt::Debug for Sequence<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("children", &self.children)
            .finish()
    }
}

impl<C> fmt::Debug for Selector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("children", &self.children)
            .finish()
    }
}

impl<C> fmt::Debug for Parallel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parallel")
            .field("policy", &self.policy)
            .field("children", &self.children)
            .finish()
    }
}

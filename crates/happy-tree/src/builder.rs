//! Fluent, stack-based tree construction.
//!
//! [`BehaviourTreeBuilder`] turns a linear description into a linked tree.
//! Opening calls ([`sequence`](BehaviourTreeBuilder::sequence),
//! [`selector`](BehaviourTreeBuilder::selector),
//! [`parallel`](BehaviourTreeBuilder::parallel),
//! [`inverter`](BehaviourTreeBuilder::inverter)) push a parent onto the
//! builder's stack, leaf calls attach to whatever parent is on top, and
//! [`end`](BehaviourTreeBuilder::end) closes the top parent:
//!
//! ```
//! use happy_tree::{BehaviourTreeBuilder, Status, TimeData};
//!
//! # fn main() -> happy_tree::Result<()> {
//! let mut tree = BehaviourTreeBuilder::<TimeData>::new()
//!     .sequence()?
//!         .condition(|t| t.delta_time < 1.0)?
//!         .inverter()?
//!             .action(|_| Status::Failure)?
//!         .end()?
//!     .end()?
//!     .build()?;
//!
//! assert_eq!(tree.tick(&TimeData::new(0.1))?, Status::Success);
//! # Ok(())
//! # }
//! ```
//!
//! Every misuse (a leaf with no parent, an unmatched `end`, a second child
//! for an inverter, building with nothing closed) is reported at the call
//! that caused it.

use std::fmt;

use crate::{
    Inverter, Node, NodeKind, Parallel, ParallelPolicy, Result, Selector, Sequence, Status,
    TimeData, TreeError,
};

/// Assembles a [`Node`] tree from nested builder calls.
///
/// Open parents are owned by the builder until they are closed. On
/// [`end`](Self::end) the closed parent is attached to the parent below it,
/// or becomes the completed root when the stack runs empty.
pub struct BehaviourTreeBuilder<C = TimeData> {
    /// Parents currently accepting children, innermost last.
    parents: Vec<Node<C>>,
    /// Most recently completed top-level node.
    root: Option<Node<C>>,
}

impl<C> BehaviourTreeBuilder<C> {
    pub fn new() -> Self {
        Self {
            parents: Vec::new(),
            root: None,
        }
    }

    /// Number of parents that are open and waiting for [`end`](Self::end).
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if no parent is open and no root is waiting to be built.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty() && self.root.is_none()
    }

    /// Attaches an action leaf to the current parent.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnnestedLeaf`] if no parent is open, or the current
    /// parent's arity error if it is full.
    pub fn action<F>(&mut self, f: F) -> Result<&mut Self>
    where
        F: FnMut(&C) -> Status + 'static,
    {
        self.attach(Node::action(f))
    }

    /// Like [`action`](Self::action), but `true` maps to `Success` and
    /// `false` to `Failure`.
    pub fn condition<P>(&mut self, predicate: P) -> Result<&mut Self>
    where
        P: FnMut(&C) -> bool + 'static,
    {
        self.attach(Node::condition(predicate))
    }

    /// Opens an inverter. It must receive exactly one child before it is
    /// ticked.
    pub fn inverter(&mut self) -> Result<&mut Self> {
        self.open(Node::Inverter(Inverter::new()))
    }

    /// Opens a sequence.
    pub fn sequence(&mut self) -> Result<&mut Self> {
        self.open(Node::Sequence(Sequence::new(Vec::new())))
    }

    /// Opens a selector.
    pub fn selector(&mut self) -> Result<&mut Self> {
        self.open(Node::Selector(Selector::new(Vec::new())))
    }

    /// Opens a parallel node with the given thresholds. A threshold of `0`
    /// disables that outcome.
    pub fn parallel(
        &mut self,
        required_to_fail: usize,
        required_to_succeed: usize,
    ) -> Result<&mut Self> {
        let policy = ParallelPolicy::new(required_to_fail, required_to_succeed);
        self.open(Node::Parallel(Parallel::new(policy, Vec::new())))
    }

    /// Attaches an already built tree to the current parent.
    ///
    /// The subtree is moved in as-is; it is neither copied nor validated
    /// again.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnnestedLeaf`] if no parent is open, or the current
    /// parent's arity error if it is full.
    pub fn splice(&mut self, subtree: Node<C>) -> Result<&mut Self> {
        self.attach(Node::Subtree(Box::new(subtree)))
    }

    /// Same as [`splice`](Self::splice) for a subtree that may be absent.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidArgument`] if `subtree` is `None`, checked before
    /// anything else.
    pub fn splice_opt(&mut self, subtree: Option<Node<C>>) -> Result<&mut Self> {
        let Some(subtree) = subtree else {
            tracing::warn!("rejected splice of an absent subtree");
            return Err(TreeError::InvalidArgument("subtree must be present"));
        };
        self.splice(subtree)
    }

    /// Closes the innermost open parent.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnmatchedClose`] if no parent is open.
    pub fn end(&mut self) -> Result<&mut Self> {
        let Some(node) = self.parents.pop() else {
            tracing::warn!("rejected end() with no open parent");
            return Err(TreeError::UnmatchedClose);
        };

        let kind = node.kind();
        match self.parents.last_mut() {
            Some(parent) => {
                // Capacity was reserved when `node` was opened.
                parent.add_child(node)?;
                tracing::debug!(%kind, depth = self.parents.len(), "closed nested node");
            }
            None => {
                if self.root.is_some() {
                    tracing::debug!("replacing previously completed root");
                }
                tracing::debug!(%kind, "completed root node");
                self.root = Some(node);
            }
        }
        Ok(self)
    }

    /// Takes the completed tree out of the builder.
    ///
    /// The builder is left empty and can assemble another tree.
    ///
    /// # Errors
    ///
    /// - [`TreeError::EmptyTree`] if no top-level node was ever closed.
    /// - [`TreeError::UnclosedParent`] if parents are still open.
    pub fn build(&mut self) -> Result<Node<C>> {
        if self.root.is_none() {
            tracing::warn!(open = self.parents.len(), "rejected build with no completed root");
            return Err(TreeError::EmptyTree);
        }
        if !self.parents.is_empty() {
            tracing::warn!(open = self.parents.len(), "rejected build with open parents");
            return Err(TreeError::UnclosedParent {
                open: self.parents.len(),
            });
        }

        self.root.take().ok_or(TreeError::EmptyTree)
    }

    /// Attaches a finished node to the current parent.
    fn attach(&mut self, child: Node<C>) -> Result<&mut Self> {
        let kind = child.kind();
        let Some(parent) = self.parents.last_mut() else {
            tracing::warn!(%kind, "rejected node with no open parent");
            return Err(TreeError::UnnestedLeaf { kind });
        };

        if let Err(err) = parent.add_child(child) {
            tracing::warn!(%kind, parent = %parent.kind(), %err, "rejected child");
            return Err(err);
        }
        tracing::trace!(%kind, depth = self.parents.len(), "attached node");
        Ok(self)
    }

    /// Pushes a new parent, reserving a child slot in the current one.
    fn open(&mut self, node: Node<C>) -> Result<&mut Self> {
        let kind = node.kind();
        if let Some(parent) = self.parents.last()
            && let Err(err) = parent.ensure_accepts_child()
        {
            tracing::warn!(%kind, parent = %parent.kind(), %err, "rejected child");
            return Err(err);
        }

        self.parents.push(node);
        tracing::debug!(%kind, depth = self.parents.len(), "opened parent node");
        Ok(self)
    }
}

impl<C> Default for BehaviourTreeBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for BehaviourTreeBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open: Vec<NodeKind> = self.parents.iter().map(Node::kind).collect();
        f.debug_struct("BehaviourTreeBuilder")
            .field("open", &open)
            .field("root", &self.root.as_ref().map(Node::kind))
            .finish()
    }
}

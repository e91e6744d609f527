//! Structural errors raised while building or ticking a tree.
//!
//! Every variant describes a malformed tree or a misuse of the builder.
//! None of them are transient, so callers should fix the tree description
//! rather than retry.

use thiserror::Error;

use crate::node::NodeKind;

pub type Result<T, E = TreeError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("cannot create an unnested {kind} node, it must be nested inside a parent node")]
    UnnestedLeaf { kind: NodeKind },

    #[error("cannot add more than {max} child node(s) to {kind}")]
    ArityViolation { kind: NodeKind, max: usize },

    #[error("end() called without a matching open parent node")]
    UnmatchedClose,

    #[error("cannot create a behaviour tree with zero nodes")]
    EmptyTree,

    #[error("cannot build while {open} parent node(s) are still open")]
    UnclosedParent { open: usize },

    #[error("{kind} must have a child node before it is ticked")]
    MissingChild { kind: NodeKind },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("{kind} nodes cannot have children")]
    NotAParent { kind: NodeKind },
}

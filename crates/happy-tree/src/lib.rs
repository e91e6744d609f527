//! Reactive behaviour tree engine.
//!
//! This library composes decision logic for game and agent AI out of small
//! nodes, and assembles them into validated trees with a fluent builder.
//!
//! - **Three-valued status**: nodes succeed, fail, or report `Running` and
//!   expect to be ticked again on a later cycle
//! - **Synchronous ticks**: one `tick` call walks the tree depth-first and
//!   returns a single [`Status`]; nothing runs on other threads
//! - **Closed node set**: [`Node`] is an enum, so every variant is known and
//!   matched exhaustively
//! - **Fail-fast construction**: structural mistakes surface as
//!   [`TreeError`] at the call that made them
//!
//! # Architecture
//!
//! - [`Node`]: the tree node enum and its `tick` dispatch
//! - [`Status`]: Success, Failure or Running
//! - [`TimeData`]: default per-tick context
//! - Leaf node: [`Action`]
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`]
//! - Decorator node: [`Inverter`]
//! - [`BehaviourTreeBuilder`]: stack-based tree assembly

pub mod action;
pub mod builder;
pub mod composite;
pub mod context;
pub mod decorator;
pub mod error;
pub mod node;
pub mod status;

// Re-export core types for ergonomic API
pub use action::Action;
pub use builder::BehaviourTreeBuilder;
pub use composite::{Parallel, ParallelPolicy, Selector, Sequence};
pub use context::TimeData;
pub use decorator::Inverter;
pub use error::{Result, TreeError};
pub use node::{Node, NodeKind};
pub use status::Status;

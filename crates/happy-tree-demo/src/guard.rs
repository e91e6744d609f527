//! Guard AI assembled from builder calls.
//!
//! ```text
//! guard()
//!   └─ Selector
//!       ├─ Sequence                 ← respond to the alarm
//!       │   ├─ Condition(alarm)
//!       │   └─ Parallel(0, n)
//!       │       ├─ Action(search)   ← Running until the area is searched
//!       │       └─ Action(radio)
//!       └─ Subtree(patrol())
//!           └─ Sequence
//!               ├─ Inverter
//!               │   └─ Condition(alarm)
//!               └─ Action(walk)     ← always Running
//! ```

use happy_tree::{BehaviourTreeBuilder, Node, Result, Status, TimeData};

/// Seconds of searching before the guard gives the all-clear.
const SEARCH_SECONDS: f32 = 0.25;

/// Per-tick view of the world handed to every guard node.
#[derive(Debug, Clone, Copy)]
pub struct GuardContext {
    pub time: TimeData,
    pub tick: u64,
    pub alarm: bool,
}

/// Walks the patrol route for as long as no alarm is raised.
pub fn patrol() -> Result<Node<GuardContext>> {
    let mut builder = BehaviourTreeBuilder::new();
    builder
        .sequence()?
        .inverter()?
        .condition(|ctx: &GuardContext| ctx.alarm)?
        .end()?
        .action(|ctx: &GuardContext| {
            tracing::debug!(tick = ctx.tick, "walking patrol route");
            Status::Running
        })?
        .end()?;
    builder.build()
}

/// Full guard tree. `parallel_succeed` is how many alarm branches must
/// succeed in the same tick before the guard stands down.
pub fn guard(parallel_succeed: usize) -> Result<Node<GuardContext>> {
    let mut searched = 0.0_f32;

    let mut builder = BehaviourTreeBuilder::new();
    builder
        .selector()?
        .sequence()?
        .condition(|ctx: &GuardContext| ctx.alarm)?
        .parallel(0, parallel_succeed)?
        .action(move |ctx: &GuardContext| {
            searched += ctx.time.delta_time;
            if searched >= SEARCH_SECONDS {
                tracing::debug!(tick = ctx.tick, searched, "area searched");
                Status::Success
            } else {
                Status::Running
            }
        })?
        .action(|ctx: &GuardContext| {
            tracing::debug!(tick = ctx.tick, "radioing for backup");
            Status::Success
        })?
        .end()?
        .end()?
        .splice(patrol()?)?
        .end()?;
    builder.build()
}

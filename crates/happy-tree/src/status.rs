//! Status returned by behaviour tree nodes.

/// The result of ticking a node.
///
/// Unlike a purely turn-based tree, a node may report that its work spans
/// several ticks by returning [`Status::Running`]; the caller is expected to
/// tick the tree again on a later evaluation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The node completed successfully.
    ///
    /// For conditions: the condition held.
    /// For actions: the action finished.
    Success,

    /// The node failed.
    ///
    /// For conditions: the condition did not hold.
    /// For actions: the action could not be carried out.
    Failure,

    /// The node has not finished yet and expects to be ticked again.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swaps `Success` and `Failure`; `Running` passes through unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

impl From<bool> for Status {
    /// Maps a predicate outcome onto `Success`/`Failure`.
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

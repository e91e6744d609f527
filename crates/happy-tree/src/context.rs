//! Default tick context.
//!
//! Every node is generic over the context type `C` it is ticked with. The
//! tree never inspects or mutates the context; it only hands the same
//! reference to each node visited during one tick. [`TimeData`] is the
//! context used when a tree is declared without naming one.

use std::time::Duration;

/// Timing information for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeData {
    /// Seconds elapsed since the previous tick.
    pub delta_time: f32,
}

impl TimeData {
    /// Creates timing data for a tick that follows the previous one by
    /// `delta_time` seconds.
    pub const fn new(delta_time: f32) -> Self {
        Self { delta_time }
    }
}

impl From<Duration> for TimeData {
    fn from(elapsed: Duration) -> Self {
        Self::new(elapsed.as_secs_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_duration_uses_seconds() {
        let time = TimeData::from(Duration::from_millis(250));
        assert_eq!(time.delta_time, 0.25);
    }

    #[test]
    fn default_is_zero_elapsed() {
        assert_eq!(TimeData::default(), TimeData::new(0.0));
    }
}

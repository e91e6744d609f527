//! Demo configuration structures and loaders.
use std::env;
use std::time::Duration;

/// Settings for one run of the guard simulation.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    /// Number of ticks to run before exiting.
    pub ticks: u64,
    /// Simulated time between two ticks.
    pub delta: Duration,
    /// Tick on which the alarm goes off.
    pub alert_tick: u64,
    /// Branches of the alarm response that must succeed together.
    pub parallel_succeed: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            ticks: 10,
            delta: Duration::from_millis(100),
            alert_tick: 3,
            parallel_succeed: 2,
        }
    }
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DEMO_TICKS` - Number of ticks to run (default: 10, min: 1)
    /// - `DEMO_DELTA_MS` - Milliseconds between ticks (default: 100)
    /// - `DEMO_ALERT_TICK` - Tick on which the alarm is raised (default: 3)
    /// - `DEMO_PARALLEL_SUCCEED` - Alarm branches required to succeed (default: 2)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ticks) = read_env::<u64>("DEMO_TICKS") {
            config.ticks = ticks.max(1);
        }

        if let Some(millis) = read_env::<u64>("DEMO_DELTA_MS") {
            config.delta = Duration::from_millis(millis);
        }

        if let Some(tick) = read_env::<u64>("DEMO_ALERT_TICK") {
            config.alert_tick = tick;
        }

        if let Some(required) = read_env::<usize>("DEMO_PARALLEL_SUCCEED") {
            config.parallel_succeed = required;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_a_short_session() {
        let config = DemoConfig::default();
        assert_eq!(config.ticks, 10);
        assert_eq!(config.delta, Duration::from_millis(100));
        assert!(config.alert_tick < config.ticks);
    }

    #[test]
    fn unset_variable_reads_as_none() {
        assert_eq!(read_env::<u64>("HAPPY_TREE_DEMO_SURELY_UNSET"), None);
    }
}

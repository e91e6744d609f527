//! Guard simulation entry point.
mod config;
mod guard;

use anyhow::{Context, Result};
use config::DemoConfig;
use guard::GuardContext;
use happy_tree::TimeData;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env();
    tracing::info!(?config, "starting guard simulation");

    let mut tree = guard::guard(config.parallel_succeed).context("failed to build guard tree")?;
    let time = TimeData::from(config.delta);

    for tick in 0..config.ticks {
        let ctx = GuardContext {
            time,
            tick,
            alarm: tick >= config.alert_tick,
        };
        let status = tree
            .tick(&ctx)
            .with_context(|| format!("guard tree failed on tick {}", tick))?;
        tracing::info!(tick, alarm = ctx.alarm, ?status, "ticked guard");

        if !status.is_running() {
            tracing::info!(tick, ?status, "guard finished");
            break;
        }
    }

    Ok(())
}

//! Spawns two tasks that each push a token into a bounded channel; `main` pops both tokens before
//! printing `main exit`.

use std::sync::Arc;

use fanin_std_rs::{
  fan_in::{run_fan_in, BarrierRealization, FanInConfig, StdoutSink},
  BarrierError,
};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), BarrierError> {
  let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
  let _ = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(std::io::stderr).try_init();

  let config = FanInConfig::default().with_realization(BarrierRealization::Queue);
  run_fan_in(&config, Arc::new(StdoutSink)).await
}

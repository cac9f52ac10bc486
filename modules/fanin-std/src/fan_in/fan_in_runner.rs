use std::sync::Arc;

use fanin_core_rs::{BarrierError, CompletionBarrier, CompletionBarrierBackend};

use super::{BarrierRealization, FanInConfig, LineSink};
use crate::{
  concurrent::{TimedWait, TokioCountingBarrierBackend, TokioQueueBarrierBackend},
  task::spawn_signalled,
};

/// Line emitted by the orchestrator once every task has completed.
pub const FINAL_LINE: &str = "main exit";

/// Returns the line emitted by the task with the given 1-based index.
#[must_use]
pub fn task_line(index: usize) -> String {
  format!("running in goroutine {}", index)
}

/// Runs a fan-in with the backend selected by `config`.
///
/// # Errors
///
/// Returns [`BarrierError::Timeout`] when a deadline is configured and elapses before every task
/// has signaled.
pub async fn run_fan_in<S>(config: &FanInConfig, sink: Arc<S>) -> Result<(), BarrierError>
where
  S: LineSink, {
  match config.realization() {
    | BarrierRealization::Counting => run_fan_in_with::<TokioCountingBarrierBackend, S>(config, sink).await,
    | BarrierRealization::Queue => run_fan_in_with::<TokioQueueBarrierBackend, S>(config, sink).await,
  }
}

/// Runs a fan-in over an explicit barrier backend.
///
/// Spawns `config.task_count()` tasks that each emit their [`task_line`] and signal the barrier,
/// waits for all of them, then emits [`FINAL_LINE`].
///
/// # Errors
///
/// Returns [`BarrierError::Timeout`] when a deadline is configured and elapses before every task
/// has signaled.
pub async fn run_fan_in_with<B, S>(config: &FanInConfig, sink: Arc<S>) -> Result<(), BarrierError>
where
  B: CompletionBarrierBackend + Send + 'static,
  S: LineSink, {
  let task_count = config.task_count();
  tracing::debug!(task_count, realization = %config.realization(), "starting fan-in");

  let barrier = CompletionBarrier::<B>::new(task_count);
  for index in 1..=task_count {
    let sink = Arc::clone(&sink);
    drop(spawn_signalled(&barrier, async move {
      sink.emit_line(&task_line(index));
    }));
  }

  match config.deadline_opt() {
    | Some(deadline) => barrier.wait_timeout(deadline).await?,
    | None => barrier.wait().await?,
  }

  sink.emit_line(FINAL_LINE);
  tracing::debug!(task_count, "fan-in complete");
  Ok(())
}

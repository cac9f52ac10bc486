use std::time::Duration;

use super::BarrierRealization;

const DEFAULT_TASK_COUNT: usize = 2;

/// Configuration options applied when running a fan-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FanInConfig {
  /// Number of tasks spawned and awaited.
  task_count:   usize,
  /// Barrier backend used to await the tasks.
  realization:  BarrierRealization,
  /// Optional bound on how long the orchestrator waits.
  deadline_opt: Option<Duration>,
}

impl Default for FanInConfig {
  fn default() -> Self {
    Self { task_count: DEFAULT_TASK_COUNT, realization: BarrierRealization::default(), deadline_opt: None }
  }
}

impl FanInConfig {
  /// Sets the number of tasks to spawn.
  #[must_use]
  pub const fn with_task_count(mut self, task_count: usize) -> Self {
    self.task_count = task_count;
    self
  }

  /// Sets the barrier backend.
  #[must_use]
  pub const fn with_realization(mut self, realization: BarrierRealization) -> Self {
    self.realization = realization;
    self
  }

  /// Sets the wait deadline; `None` waits without bound.
  #[must_use]
  pub const fn with_deadline_opt(mut self, deadline: Option<Duration>) -> Self {
    self.deadline_opt = deadline;
    self
  }

  /// Returns the number of tasks to spawn.
  #[must_use]
  pub const fn task_count(&self) -> usize {
    self.task_count
  }

  /// Returns the barrier backend.
  #[must_use]
  pub const fn realization(&self) -> BarrierRealization {
    self.realization
  }

  /// Returns the wait deadline, if any.
  #[must_use]
  pub const fn deadline_opt(&self) -> Option<Duration> {
    self.deadline_opt
  }
}

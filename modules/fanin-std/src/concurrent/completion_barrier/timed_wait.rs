use std::time::Duration;

use async_trait::async_trait;
use fanin_core_rs::{BarrierError, CompletionBarrier, CompletionBarrierBackend};
use tokio::time::{error::Elapsed, timeout_at, Instant};
use tokio_util::sync::CancellationToken;

/// Bounded variants of [`CompletionBarrier::wait`].
///
/// Abandoning a wait through any of these methods releases the waiter slot, so the barrier can be
/// waited on again afterwards.
#[async_trait(?Send)]
pub trait TimedWait {
  /// Waits for every expected completion, giving up after `timeout`.
  ///
  /// # Errors
  ///
  /// Returns [`BarrierError::Timeout`] when the timeout elapses first, or any error the plain wait
  /// reports.
  async fn wait_timeout(&self, timeout: Duration) -> Result<(), BarrierError>;

  /// Waits for every expected completion, giving up at `deadline`.
  ///
  /// # Errors
  ///
  /// Returns [`BarrierError::Timeout`] when the deadline passes first, or any error the plain wait
  /// reports.
  async fn wait_deadline(&self, deadline: Instant) -> Result<(), BarrierError>;

  /// Waits for every expected completion unless `token` is cancelled first.
  ///
  /// # Errors
  ///
  /// Returns [`BarrierError::Cancelled`] when the token fires first, or any error the plain wait
  /// reports.
  async fn wait_or_cancel(&self, token: &CancellationToken) -> Result<(), BarrierError>;
}

fn settle<B>(
  barrier: &CompletionBarrier<B>,
  outcome: Result<Result<(), BarrierError>, Elapsed>,
) -> Result<(), BarrierError>
where
  B: CompletionBarrierBackend, {
  outcome.unwrap_or_else(|_| {
    tracing::warn!(outstanding = barrier.outstanding(), expected = barrier.expected(), "barrier wait timed out");
    Err(BarrierError::Timeout)
  })
}

#[async_trait(?Send)]
impl<B> TimedWait for CompletionBarrier<B>
where
  B: CompletionBarrierBackend,
{
  async fn wait_timeout(&self, timeout: Duration) -> Result<(), BarrierError> {
    // `tokio::time::timeout` saturates durations that overflow `Instant`.
    let outcome = tokio::time::timeout(timeout, self.wait()).await;
    settle(self, outcome)
  }

  async fn wait_deadline(&self, deadline: Instant) -> Result<(), BarrierError> {
    let outcome = timeout_at(deadline, self.wait()).await;
    settle(self, outcome)
  }

  async fn wait_or_cancel(&self, token: &CancellationToken) -> Result<(), BarrierError> {
    tokio::select! {
      biased;
      result = self.wait() => result,
      () = token.cancelled() => {
        tracing::debug!(outstanding = self.outstanding(), "barrier wait cancelled");
        Err(BarrierError::Cancelled)
      },
    }
  }
}

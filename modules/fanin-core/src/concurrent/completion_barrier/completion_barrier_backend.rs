use alloc::boxed::Box;

use async_trait::async_trait;

use super::BarrierError;

/// Backend contract for [`CompletionBarrier`](super::CompletionBarrier).
///
/// Implementations own the shared completion state (an atomic counter, a token queue, ...) and
/// must be cheap to clone: every clone observes the same barrier.
#[async_trait(?Send)]
pub trait CompletionBarrierBackend: Clone {
  /// Creates a backend awaiting `expected` completion signals.
  fn new(expected: usize) -> Self;

  /// Returns the number of completions the backend was created for.
  fn expected(&self) -> usize;

  /// Returns the number of completions that have not been signaled yet.
  fn outstanding(&self) -> usize;

  /// Records one completion without blocking.
  ///
  /// # Errors
  ///
  /// Returns [`BarrierError::SignalOverflow`] once `expected` completions were already recorded.
  fn signal(&self) -> Result<(), BarrierError>;

  /// Suspends until all expected completions have been observed.
  ///
  /// # Errors
  ///
  /// Returns [`BarrierError::ConcurrentWait`] when another caller is already waiting.
  async fn wait(&self) -> Result<(), BarrierError>;
}

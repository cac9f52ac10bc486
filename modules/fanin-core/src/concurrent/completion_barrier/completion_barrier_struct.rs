use super::{BarrierError, CompletionBarrierBackend, SignalGuard};


/// Single-waiter barrier that releases once a fixed number of tasks have signaled completion.
///
/// Clones share the same underlying state, so the orchestrating context keeps one handle and hands
/// clones (or [`SignalGuard`]s) to the tasks it spawns.
#[derive(Clone, Debug)]
pub struct CompletionBarrier<B>
where
  B: CompletionBarrierBackend, {
  backend: B,
}

impl<B> CompletionBarrier<B>
where
  B: CompletionBarrierBackend,
{
  /// Creates a barrier awaiting `expected` completion signals.
  ///
  /// With `expected == 0` the barrier is released from the start.
  #[must_use]
  pub fn new(expected: usize) -> Self {
    Self { backend: B::new(expected) }
  }

  /// Returns the number of completions the barrier was created for.
  #[must_use]
  pub fn expected(&self) -> usize {
    self.backend.expected()
  }

  /// Returns the number of completions still missing.
  #[must_use]
  pub fn outstanding(&self) -> usize {
    self.backend.outstanding()
  }

  /// Returns `true` once every expected completion has been signaled.
  #[must_use]
  pub fn is_complete(&self) -> bool {
    self.outstanding() == 0
  }

  /// Records one completion.
  ///
  /// # Errors
  ///
  /// Returns [`BarrierError::SignalOverflow`] when all expected completions were already recorded.
  pub fn signal(&self) -> Result<(), BarrierError> {
    self.backend.signal()
  }

  /// Returns a guard that signals this barrier exactly once when it is completed or dropped.
  pub fn guard(&self) -> SignalGuard<B> {
    SignalGuard::new(self.backend.clone())
  }

  /// Suspends until every expected completion has been signaled.
  ///
  /// # Errors
  ///
  /// Returns [`BarrierError::ConcurrentWait`] when another caller is already suspended here.
  pub async fn wait(&self) -> Result<(), BarrierError> {
    self.backend.wait().await
  }

  /// Gets a reference to the backend.
  #[must_use]
  pub const fn backend(&self) -> &B {
    &self.backend
  }
}

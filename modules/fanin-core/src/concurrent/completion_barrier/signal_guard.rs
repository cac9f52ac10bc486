use core::fmt;

use super::{BarrierError, CompletionBarrierBackend};


/// Scoped completion signal for one task.
///
/// The guard signals its barrier exactly once: either explicitly through [`SignalGuard::complete`]
/// or implicitly when dropped, which covers early returns, unwinding panics and aborted futures.
#[must_use = "dropping the guard signals the barrier immediately"]
pub struct SignalGuard<B>
where
  B: CompletionBarrierBackend, {
  backend: Option<B>,
}

impl<B> SignalGuard<B>
where
  B: CompletionBarrierBackend,
{
  pub(crate) const fn new(backend: B) -> Self {
    Self { backend: Some(backend) }
  }

  /// Signals the barrier now and reports the outcome.
  ///
  /// # Errors
  ///
  /// Returns [`BarrierError::SignalOverflow`] when the barrier had already recorded every expected
  /// completion.
  pub fn complete(mut self) -> Result<(), BarrierError> {
    match self.backend.take() {
      | Some(backend) => backend.signal(),
      | None => Ok(()),
    }
  }
}

impl<B> Drop for SignalGuard<B>
where
  B: CompletionBarrierBackend,
{
  fn drop(&mut self) {
    if let Some(backend) = self.backend.take() {
      let _ = backend.signal();
    }
  }
}

impl<B> fmt::Debug for SignalGuard<B>
where
  B: CompletionBarrierBackend,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SignalGuard").field("armed", &self.backend.is_some()).finish()
  }
}

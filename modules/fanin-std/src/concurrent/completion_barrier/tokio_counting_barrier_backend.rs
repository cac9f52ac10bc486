//! Tokio counting barrier backend implementation.

use std::{
  fmt,
  sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
  },
};

use async_trait::async_trait;
use fanin_core_rs::{BarrierError, CompletionBarrierBackend};
use tokio::sync::Notify;

use super::wait_slot::WaitSlot;

struct Inner {
  expected:  usize,
  remaining: AtomicUsize,
  waiting:   AtomicBool,
  notify:    Notify,
}

/// Backend implementation of the completion barrier using an atomic countdown and Tokio's
/// [`Notify`].
///
/// The counter starts at `expected` and every signal decrements it with release semantics; the
/// waiter reads it with acquire semantics, so everything a task did before signaling is visible
/// once the waiter is released.
#[derive(Clone)]
pub struct TokioCountingBarrierBackend {
  inner: Arc<Inner>,
}

impl fmt::Debug for TokioCountingBarrierBackend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TokioCountingBarrierBackend")
      .field("expected", &self.inner.expected)
      .field("remaining", &self.inner.remaining.load(Ordering::Acquire))
      .finish()
  }
}

#[async_trait(?Send)]
impl CompletionBarrierBackend for TokioCountingBarrierBackend {
  fn new(expected: usize) -> Self {
    Self {
      inner: Arc::new(Inner {
        expected,
        remaining: AtomicUsize::new(expected),
        waiting: AtomicBool::new(false),
        notify: Notify::new(),
      }),
    }
  }

  fn expected(&self) -> usize {
    self.inner.expected
  }

  fn outstanding(&self) -> usize {
    self.inner.remaining.load(Ordering::Acquire)
  }

  fn signal(&self) -> Result<(), BarrierError> {
    let expected = self.inner.expected;
    match self.inner.remaining.fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1)) {
      | Ok(1) => {
        tracing::debug!(expected, "all completions signaled");
        // notify_one stores a permit when the waiter has not parked yet.
        self.inner.notify.notify_one();
        Ok(())
      },
      | Ok(prev) => {
        tracing::trace!(remaining = prev - 1, expected, "completion signaled");
        Ok(())
      },
      | Err(_) => {
        tracing::warn!(expected, "signal called after every expected completion was recorded");
        Err(BarrierError::SignalOverflow { expected })
      },
    }
  }

  async fn wait(&self) -> Result<(), BarrierError> {
    let inner = self.inner.clone();
    let _slot = WaitSlot::acquire(&inner.waiting)?;
    loop {
      if inner.remaining.load(Ordering::Acquire) == 0 {
        return Ok(());
      }
      inner.notify.notified().await;
    }
  }
}

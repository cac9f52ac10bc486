//! Tokio queue barrier backend implementation.

use std::{
  fmt,
  sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
  },
};

use async_trait::async_trait;
use fanin_core_rs::{BarrierError, CompletionBarrierBackend};
use tokio::sync::{mpsc, Mutex};

/// Token carried through the queue barrier's channel, one per completed task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignalToken;

struct TokenReceiver {
  receiver: mpsc::Receiver<SignalToken>,
  received: usize,
}

struct Inner {
  expected: usize,
  issued:   AtomicUsize,
  sender:   mpsc::Sender<SignalToken>,
  receiver: Mutex<TokenReceiver>,
}

/// Backend implementation of the completion barrier using a bounded Tokio [`mpsc`] channel.
///
/// The channel holds at least `expected` tokens, so a legal signal is a `try_send` that never
/// blocks the task. The waiter owns the receiving side and pops tokens one at a time until it has
/// seen `expected` of them.
#[derive(Clone)]
pub struct TokioQueueBarrierBackend {
  inner: Arc<Inner>,
}

impl TokioQueueBarrierBackend {
  /// Returns the capacity of the underlying token channel.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.sender.max_capacity()
  }
}

impl fmt::Debug for TokioQueueBarrierBackend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TokioQueueBarrierBackend")
      .field("expected", &self.inner.expected)
      .field("issued", &self.inner.issued.load(Ordering::Acquire))
      .field("capacity", &self.capacity())
      .finish()
  }
}

#[async_trait(?Send)]
impl CompletionBarrierBackend for TokioQueueBarrierBackend {
  fn new(expected: usize) -> Self {
    // Tokio channels need a non-zero capacity even when no token will ever be sent.
    let (sender, receiver) = mpsc::channel(expected.max(1));
    Self {
      inner: Arc::new(Inner {
        expected,
        issued: AtomicUsize::new(0),
        sender,
        receiver: Mutex::new(TokenReceiver { receiver, received: 0 }),
      }),
    }
  }

  fn expected(&self) -> usize {
    self.inner.expected
  }

  fn outstanding(&self) -> usize {
    self.inner.expected - self.inner.issued.load(Ordering::Acquire)
  }

  fn signal(&self) -> Result<(), BarrierError> {
    let expected = self.inner.expected;
    let reserved =
      self.inner.issued.fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| (n < expected).then_some(n + 1));
    if reserved.is_err() {
      tracing::warn!(expected, "signal called after every expected completion was recorded");
      return Err(BarrierError::SignalOverflow { expected });
    }

    // `inner` owns the receiver and the channel holds `expected` tokens, so a reserved send succeeds.
    match self.inner.sender.try_send(SignalToken) {
      | Ok(()) => {
        tracing::trace!(expected, "completion token enqueued");
        Ok(())
      },
      | Err(error) => {
        self.inner.issued.fetch_sub(1, Ordering::AcqRel);
        tracing::warn!(expected, %error, "completion token rejected by the channel");
        Err(BarrierError::SignalOverflow { expected })
      },
    }
  }

  async fn wait(&self) -> Result<(), BarrierError> {
    let inner = self.inner.clone();
    let Ok(mut tokens) = inner.receiver.try_lock() else {
      tracing::warn!("rejected a second concurrent waiter");
      return Err(BarrierError::ConcurrentWait);
    };
    // `inner` keeps a sender alive, so `recv` never yields `None` here.
    while tokens.received < inner.expected && tokens.receiver.recv().await.is_some() {
      tokens.received += 1;
    }
    tracing::debug!(expected = inner.expected, "all completion tokens received");
    Ok(())
  }
}

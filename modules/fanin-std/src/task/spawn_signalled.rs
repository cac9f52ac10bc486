use std::future::Future;

use fanin_core_rs::{CompletionBarrier, CompletionBarrierBackend, SignalGuard};
use tokio::task::JoinHandle;


/// Spawns `future` onto the Tokio runtime and signals `barrier` once it finishes.
///
/// The task owns a [`SignalGuard`], so the barrier is also signaled when the future panics or the
/// task is aborted before completing.
pub fn spawn_signalled<B, F>(barrier: &CompletionBarrier<B>, future: F) -> JoinHandle<F::Output>
where
  B: CompletionBarrierBackend + Send + 'static,
  F: Future + Send + 'static,
  F::Output: Send + 'static, {
  let guard = barrier.guard();
  tokio::spawn(async move {
    let output = future.await;
    complete(guard);
    output
  })
}

/// Runs `f` on Tokio's blocking thread pool and signals `barrier` once it returns.
///
/// As with [`spawn_signalled`], a panic inside `f` still signals the barrier.
pub fn spawn_blocking_signalled<B, F, R>(barrier: &CompletionBarrier<B>, f: F) -> JoinHandle<R>
where
  B: CompletionBarrierBackend + Send + 'static,
  F: FnOnce() -> R + Send + 'static,
  R: Send + 'static, {
  let guard = barrier.guard();
  tokio::task::spawn_blocking(move || {
    let output = f();
    complete(guard);
    output
  })
}

fn complete<B>(guard: SignalGuard<B>)
where
  B: CompletionBarrierBackend, {
  if let Err(error) = guard.complete() {
    tracing::warn!(%error, "task completion was not recorded");
  }
}

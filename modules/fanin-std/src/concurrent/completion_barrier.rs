mod timed_wait;
mod tokio_counting_barrier_backend;
mod tokio_queue_barrier_backend;
mod wait_slot;

#[cfg(test)]
mod tests;

use fanin_core_rs::CompletionBarrier;
pub use timed_wait::TimedWait;
pub use tokio_counting_barrier_backend::TokioCountingBarrierBackend;
pub use tokio_queue_barrier_backend::{SignalToken, TokioQueueBarrierBackend};

/// Completion barrier backed by an atomic countdown, the wait-group realization.
///
/// Each task decrements the shared counter once; the waiter is released when it reaches zero.
pub type CountingBarrier = CompletionBarrier<TokioCountingBarrierBackend>;

/// Completion barrier backed by a bounded token channel.
///
/// Each task enqueues one token; the waiter dequeues exactly `expected` tokens.
pub type QueueBarrier = CompletionBarrier<TokioQueueBarrierBackend>;

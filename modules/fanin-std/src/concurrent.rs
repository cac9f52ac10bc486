/// Tokio-based completion barrier implementations.
pub mod completion_barrier;

pub use completion_barrier::{
  CountingBarrier, QueueBarrier, SignalToken, TimedWait, TokioCountingBarrierBackend, TokioQueueBarrierBackend,
};

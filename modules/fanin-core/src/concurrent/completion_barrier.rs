//! Completion barrier primitives.

mod barrier_error;
mod completion_barrier_backend;
mod completion_barrier_struct;
mod signal_guard;

pub use barrier_error::BarrierError;
pub use completion_barrier_backend::CompletionBarrierBackend;
pub use completion_barrier_struct::CompletionBarrier;
pub use signal_guard::SignalGuard;

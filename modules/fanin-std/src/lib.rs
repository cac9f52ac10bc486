#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_map)]
#![deny(clippy::unused_self)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]

//! Completion barriers for the std runtime.
//!
//! This crate binds the abstractions defined in `fanin_core_rs` to Tokio: an atomic counter backend
//! (wait-group style) and a bounded channel backend (token queue style), deadline and cancellation
//! aware waits, helpers that spawn tasks which always signal their barrier, and the fan-in runner
//! used by the bundled examples.

/// Tokio-backed completion barriers.
pub mod concurrent;
/// Fan-in demonstration runner and its configuration.
pub mod fan_in;
/// Task spawning helpers that signal a barrier on every exit path.
pub mod task;

pub use fanin_core_rs::{BarrierError, CompletionBarrier, CompletionBarrierBackend, SignalGuard};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use fanin_core_rs::{BarrierError, CompletionBarrier, CompletionBarrierBackend, SignalGuard};

  pub use crate::{
    concurrent::{
      CountingBarrier, QueueBarrier, SignalToken, TimedWait, TokioCountingBarrierBackend, TokioQueueBarrierBackend,
    },
    fan_in::{run_fan_in, BarrierRealization, FanInConfig, LineSink, MemorySink, StdoutSink},
    task::{spawn_blocking_signalled, spawn_signalled},
  };
}

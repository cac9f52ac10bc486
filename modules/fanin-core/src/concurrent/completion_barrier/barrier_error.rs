use core::fmt;


/// Errors that may occur while signaling or waiting on a completion barrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarrierError {
  /// `signal()` was invoked after all expected completions had already been recorded.
  SignalOverflow {
    /// Number of completions the barrier was created for.
    expected: usize,
  },
  /// Another caller is already suspended in `wait()`.
  ConcurrentWait,
  /// The deadline elapsed before every expected completion was observed.
  Timeout,
  /// The wait was cancelled before every expected completion was observed.
  Cancelled,
}

impl BarrierError {
  /// Returns `true` when the error reports a violation of the barrier's usage contract.
  #[must_use]
  pub const fn is_usage_error(&self) -> bool {
    matches!(self, BarrierError::SignalOverflow { .. } | BarrierError::ConcurrentWait)
  }
}

impl fmt::Display for BarrierError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | BarrierError::SignalOverflow { expected } => {
        write!(f, "signal called more times than the {} expected completions", expected)
      },
      | BarrierError::ConcurrentWait => write!(f, "barrier is already being waited on"),
      | BarrierError::Timeout => write!(f, "timed out waiting for completions"),
      | BarrierError::Cancelled => write!(f, "wait was cancelled"),
    }
  }
}

impl core::error::Error for BarrierError {}

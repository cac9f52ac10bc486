use core::fmt;

/// Selects which completion barrier backend the fan-in runner uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarrierRealization {
  /// Atomic countdown, the wait-group style.
  #[default]
  Counting,
  /// Bounded token channel, the queue style.
  Queue,
}

impl fmt::Display for BarrierRealization {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | BarrierRealization::Counting => write!(f, "counting"),
      | BarrierRealization::Queue => write!(f, "queue"),
    }
  }
}

use std::sync::Mutex;

/// Destination for the lines a fan-in emits.
pub trait LineSink: Send + Sync + 'static {
  /// Emits one line.
  fn emit_line(&self, line: &str);
}

/// Writes every line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
  #[allow(clippy::print_stdout)]
  fn emit_line(&self, line: &str) {
    println!("{}", line);
  }
}

/// Records lines in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
  lines: Mutex<Vec<String>>,
}

impl MemorySink {
  /// Creates an empty sink.
  #[must_use]
  pub const fn new() -> Self {
    Self { lines: Mutex::new(Vec::new()) }
  }

  /// Returns a snapshot of the recorded lines.
  #[must_use]
  pub fn lines(&self) -> Vec<String> {
    self.lines.lock().map(|lines| lines.clone()).unwrap_or_else(|poisoned| poisoned.into_inner().clone())
  }
}

impl LineSink for MemorySink {
  fn emit_line(&self, line: &str) {
    let mut lines = self.lines.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    lines.push(line.to_owned());
  }
}

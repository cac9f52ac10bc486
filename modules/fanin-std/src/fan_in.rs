//! Fan-out/fan-in demonstration: spawn a fixed number of tasks, have each emit one line, and emit a
//! final line only after the completion barrier released.

mod barrier_realization;
mod fan_in_config;
mod fan_in_runner;
mod line_sink;


pub use barrier_realization::BarrierRealization;
pub use fan_in_config::FanInConfig;
pub use fan_in_runner::{run_fan_in, run_fan_in_with, task_line, FINAL_LINE};
pub use line_sink::{LineSink, MemorySink, StdoutSink};

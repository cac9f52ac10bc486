/// Fan-in completion barrier primitives.
pub mod completion_barrier;

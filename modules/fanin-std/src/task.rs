mod spawn_signalled;

pub use spawn_signalled::{spawn_blocking_signalled, spawn_signalled};

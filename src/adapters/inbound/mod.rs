/// Inbound adapters - drive the application from the outside world
mod watch_loop;

pub use watch_loop::{WatchLoop, WatchSummary, DEFAULT_TICK};

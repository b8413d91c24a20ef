//! Pipeline entry points.
//!
//! - `run_watcher`: poll a feed and redraw the terminal table until Ctrl-C

pub mod watch;

pub use watch::{POLL_INTERVAL, Screen, poll_once, run_watcher, watch};

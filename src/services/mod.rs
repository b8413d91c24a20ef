//! Service layer for the earthquake watcher.
//!
//! - Record classification (`classify`, `classify_all`)
//! - Table rendering (`TableRenderer`)

pub mod classify;
mod render;

pub use classify::{classify, classify_all};
pub use render::{HEADERS, TableRenderer};

//! Utils Module
pub mod telemetry;

pub use telemetry::{init_logging, LogHandle};

//! System-level modules
//!
//! - Logging initialization (tracing subscriber, file output, rotation)

pub mod logging;

pub use logging::init_logging;

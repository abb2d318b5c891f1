//! Utility modules for appforge

pub mod logging;

pub use logging::{init_logging, LoggingConfig};

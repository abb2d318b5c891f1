//! Progress reporting for builds

mod console;
mod handler;
mod logging;

pub use console::{describe, ConsoleHandler};
pub use handler::{NoOpHandler, ProgressEvent, ProgressHandler};
pub use logging::LoggingHandler;

//! Logging abstractions
//!
//! `Logger` is the sink handed to the config cascade for its diagnostics.
//! `file_logger` is a process-wide debug log for events nobody asked to see,
//! such as a keyring that failed to load.

mod traits;
mod noop;
mod console;
pub mod file_logger;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;

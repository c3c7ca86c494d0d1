//! Logger trait definition

use std::sync::Arc;

/// Diagnostic sink
///
/// Implementations:
/// - `NoOpLogger`: Silent logger, the default when verbosity is off
/// - `ConsoleLogger`: Writes to stderr
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Format and send a warning to a [`Logger`]
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

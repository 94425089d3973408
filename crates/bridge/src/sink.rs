//! Host-side sinks for forwarded console lines.

/// Prefix prepended to every forwarded console line.
pub const FORWARD_PREFIX: &str = "[Browser log] ";

/// Receives console lines forwarded from the page.
///
/// Sinks are stateless from the page's point of view and must tolerate
/// calls from any thread.
pub trait LogSink: Send + Sync {
    /// Handles one forwarded console line.
    fn log(&self, message: &str);
}

/// Writes each forwarded line to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn log(&self, message: &str) {
        println!("{}", forwarded_line(message));
    }
}

/// Formats one forwarded console line.
pub fn forwarded_line(message: &str) -> String {
    format!("{FORWARD_PREFIX}{message}")
}

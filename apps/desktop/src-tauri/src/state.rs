//! Shared application state.

use std::sync::Arc;

use svelteshell_bridge::LogSink;

/// Shared application state managed by Tauri.
pub struct DesktopState {
    /// Sink receiving the page's forwarded console lines.
    pub sink: Arc<dyn LogSink>,
}

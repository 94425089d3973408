//! Error types for bridge installation.

/// Errors from a single bridge install attempt.
///
/// None of these abort the retry loop; each is logged and the next
/// attempt proceeds.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("page scripting unavailable")]
    PageUnavailable,

    #[error("script execution failed: {0}")]
    Script(String),

    #[error("engine dispatch failed: {0}")]
    Dispatch(String),
}

//! Browser session error types.

use std::time::Duration;
use thiserror::Error;

/// Errors raised by a browsing session.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The WebDriver server refused or failed to open a session.
    #[error("Failed to open WebDriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    /// A WebDriver command failed.
    #[error("WebDriver command failed: {0}")]
    Command(#[from] fantoccini::error::CmdError),

    /// An element did not render within the allotted time.
    #[error("Timed out after {}s waiting for '{selector}'", .timeout.as_secs())]
    Timeout { selector: String, timeout: Duration },

    /// The session was used after being closed.
    #[error("Browser session already closed")]
    Closed,
}

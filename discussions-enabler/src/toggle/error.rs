//! Feature toggle error types.

use crate::browser::BrowserError;
use thiserror::Error;

/// Errors that can occur while enabling the feature on one repository.
#[derive(Debug, Error)]
pub enum ToggleError {
    /// The settings URL could not be built.
    #[error("Invalid settings URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The feature checkbox never rendered, e.g. missing admin rights.
    #[error("Feature checkbox did not render: {0}")]
    CheckboxNotRendered(#[source] BrowserError),

    /// Browser command failure.
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),
}

//! Repository discovery error types.

use crate::browser::BrowserError;
use thiserror::Error;

/// Errors that can occur during repository discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The listing URL for a page could not be built.
    #[error("Invalid repository listing URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The listing container never rendered on a page.
    #[error("Repository listing did not render on page {page}: {source}")]
    ListingNotRendered {
        page: u32,
        #[source]
        source: BrowserError,
    },

    /// Browser command failure.
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),
}

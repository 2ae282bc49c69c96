//! Runner error types.

use crate::browser::BrowserError;
use crate::discovery::DiscoveryError;
use crate::repository::RepositoryError;

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No username was given.
    #[error("A GitHub username is required")]
    MissingUsername,

    /// Explicit mode was requested with an empty repository list.
    #[error("No repositories specified")]
    NoRepositoriesSpecified,

    /// An explicit repository could not be parsed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Browser session could not be opened or a command failed.
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// The signed-in indicator never appeared.
    #[error("Login not detected after {timeout_secs}s")]
    LoginNotDetected { timeout_secs: u64 },

    /// Repository discovery failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Discovery finished without finding any repository.
    #[error("No repositories discovered for '{username}'")]
    NoRepositoriesDiscovered { username: String },
}

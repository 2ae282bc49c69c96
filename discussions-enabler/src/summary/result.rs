//! Processing result types.

use crate::repository::RepositoryRef;
use crate::toggle::ToggleStatus;

/// Result of processing a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// The feature is (or would be) enabled.
    Success {
        /// Repository processed.
        repository: RepositoryRef,
        /// What the toggle did.
        status: ToggleStatus,
    },

    /// Processing failed; the run moved on to the next repository.
    Failed {
        /// Repository processed.
        repository: RepositoryRef,
        /// Error message.
        error: String,
    },
}

impl ProcessingResult {
    /// Repository this result belongs to.
    pub fn repository(&self) -> &RepositoryRef {
        match self {
            Self::Success { repository, .. } | Self::Failed { repository, .. } => repository,
        }
    }
}

//! Run summary types.

use super::result::ProcessingResult;
use crate::toggle::ToggleStatus;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories found by discovery, if discovery ran.
    pub repositories_discovered: Option<usize>,

    /// Number of repositories the toggle was attempted on.
    pub repositories_processed: usize,

    /// Number of repositories enabled by this run.
    pub enabled: usize,

    /// Number of repositories that already had the feature enabled.
    pub already_enabled: usize,

    /// Number of repositories that would be enabled (dry run).
    pub would_enable: usize,

    /// Number of repositories that failed.
    pub failed: usize,

    /// Per-repository results, in processing order.
    pub results: Vec<ProcessingResult>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: ProcessingResult) {
        self.repositories_processed += 1;
        match &result {
            ProcessingResult::Success { status, .. } => match status {
                ToggleStatus::Enabled => self.enabled += 1,
                ToggleStatus::AlreadyEnabled => self.already_enabled += 1,
                ToggleStatus::WouldEnable => self.would_enable += 1,
            },
            ProcessingResult::Failed { .. } => self.failed += 1,
        }
        self.results.push(result);
    }

    /// Iterates over the failed results.
    pub fn failures(&self) -> impl Iterator<Item = &ProcessingResult> {
        self.results
            .iter()
            .filter(|result| matches!(result, ProcessingResult::Failed { .. }))
    }

    /// Returns true if any repository failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Returns true if every repository succeeded.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.failed == 0
    }
}

//! Runner configuration.

use crate::config::Settings;

/// Which repositories a run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySelection {
    /// Every repository in the user's listing.
    All,

    /// Repository tokens given by the caller, `name` or `owner/name`.
    Explicit(Vec<String>),
}

/// Configuration for a run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// User whose repositories are targeted and who owns bare names.
    username: String,
    /// Repositories to process.
    selection: RepositorySelection,
    /// Whether to report changes without clicking anything.
    dry_run: bool,
    /// Resolved runtime settings.
    settings: Settings,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(username: String, selection: RepositorySelection, settings: Settings) -> Self {
        Self {
            username,
            selection,
            dry_run: false,
            settings,
        }
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configured username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the repository selection.
    pub fn selection(&self) -> &RepositorySelection {
        &self.selection
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the runtime settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

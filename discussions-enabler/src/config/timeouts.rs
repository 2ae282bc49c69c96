//! Wait bounds and fixed delays.

use serde::Deserialize;
use std::time::Duration;

/// Bounds for every wait performed against the web UI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Timeouts {
    /// Seconds to wait for a listing or settings element to render.
    pub render_timeout_secs: u64,

    /// Seconds to wait for the user to finish signing in.
    pub login_timeout_secs: u64,

    /// Milliseconds to wait after ticking the checkbox so the page can save.
    pub settle_delay_ms: u64,

    /// Milliseconds to wait between two repositories.
    pub repository_delay_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            render_timeout_secs: 10,
            login_timeout_secs: 180,
            settle_delay_ms: 1000,
            repository_delay_ms: 1000,
        }
    }
}

impl Timeouts {
    /// Maximum wait for a page element.
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    /// Maximum wait for the signed-in indicator.
    pub fn login_timeout(&self) -> Duration {
        Duration::from_secs(self.login_timeout_secs)
    }

    /// Delay after a checkbox click.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Delay between repositories.
    pub fn repository_delay(&self) -> Duration {
        Duration::from_millis(self.repository_delay_ms)
    }
}

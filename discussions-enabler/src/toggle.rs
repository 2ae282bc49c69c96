//! Enabling the Discussions feature on a single repository.

mod error;
mod status;

pub use error::ToggleError;
pub use status::ToggleStatus;

use crate::browser::BrowserSession;
use crate::config::Settings;
use crate::repository::RepositoryRef;
use tracing::{debug, info};

/// Ensures the feature checkbox on `repository`'s settings page is ticked.
///
/// Idempotent: when the checkbox is already ticked nothing is clicked and
/// [`ToggleStatus::AlreadyEnabled`] is returned. After a click the function
/// waits the configured settle delay so the page can persist the change.
/// There is no read-back afterwards.
///
/// With `dry_run` set, an unticked checkbox is reported as
/// [`ToggleStatus::WouldEnable`] and left alone.
///
/// # Errors
///
/// Returns [`ToggleError`] if the page cannot be loaded, the checkbox does
/// not render, or a browser command fails. Callers treat these as
/// per-repository failures.
pub async fn enable_feature<S>(
    session: &mut S,
    settings: &Settings,
    repository: &RepositoryRef,
    dry_run: bool,
) -> Result<ToggleStatus, ToggleError>
where
    S: BrowserSession + ?Sized,
{
    let checkbox = settings.selectors.feature_checkbox.as_str();
    let url = repository.settings_url(&settings.base_url)?;

    info!(repo = %repository, "Opening repository settings");
    session.navigate(&url).await?;

    session
        .wait_for(checkbox, settings.timeouts.render_timeout())
        .await
        .map_err(ToggleError::CheckboxNotRendered)?;

    if session.is_checked(checkbox).await? {
        info!(repo = %repository, "Discussions already enabled");
        return Ok(ToggleStatus::AlreadyEnabled);
    }

    if dry_run {
        info!(repo = %repository, "[DRY RUN] Would enable Discussions");
        return Ok(ToggleStatus::WouldEnable);
    }

    session.click(checkbox).await?;
    debug!(
        repo = %repository,
        settle_ms = settings.timeouts.settle_delay_ms,
        "Checked Discussions box, waiting for save"
    );
    tokio::time::sleep(settings.timeouts.settle_delay()).await;

    info!(repo = %repository, "Enabled Discussions");
    Ok(ToggleStatus::Enabled)
}

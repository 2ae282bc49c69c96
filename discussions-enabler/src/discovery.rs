//! Repository discovery by paging through a user's repository listing.
//!
//! The listing at `https://github.com/{user}?tab=repositories&page={n}` is
//! walked page by page until a page has no repository links or no visible
//! "next" control.

mod error;

pub use error::DiscoveryError;

use crate::browser::BrowserSession;
use crate::config::Settings;
use crate::repository::RepositoryRef;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

/// Discovers every repository listed for `username`.
///
/// Repositories are returned in page order, then in-page order. Entries are
/// not deduplicated across pages.
///
/// # Arguments
///
/// * `session` - Signed-in browsing session
/// * `settings` - Base URL, selectors and render timeout
/// * `username` - Owner whose listing is scraped
///
/// # Errors
///
/// Returns [`DiscoveryError::ListingNotRendered`] if a listing page does not
/// render in time, or [`DiscoveryError::Browser`] if a browser command fails.
pub async fn discover_repositories<S>(
    session: &mut S,
    settings: &Settings,
    username: &str,
) -> Result<Vec<RepositoryRef>, DiscoveryError>
where
    S: BrowserSession + ?Sized,
{
    let span = info_span!("discover", user = %username);

    async move {
        info!("Starting repository discovery");

        let selectors = &settings.selectors;
        let mut repositories = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = listing_url(&settings.base_url, username, page)?;
            debug!(page, url = %url, "Loading listing page");
            session.navigate(&url).await?;

            session
                .wait_for(
                    &selectors.repository_list,
                    settings.timeouts.render_timeout(),
                )
                .await
                .map_err(|source| DiscoveryError::ListingNotRendered { page, source })?;

            let hrefs = session
                .attribute_values(&selectors.repository_link, "href")
                .await?;
            if hrefs.is_empty() {
                debug!(page, "Listing page has no repository links");
                break;
            }

            let accepted = filter_listing_links(&hrefs);
            debug!(
                page,
                links = hrefs.len(),
                accepted = accepted.len(),
                "Parsed listing page"
            );
            repositories.extend(accepted);

            if !session.is_visible(&selectors.next_page).await? {
                break;
            }
            page += 1;
        }

        info!(count = repositories.len(), pages = page, "Discovery complete");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Builds the URL of one page of the user's repository listing.
pub fn listing_url(base_url: &Url, username: &str, page: u32) -> Result<Url, url::ParseError> {
    let mut url = base_url.clone();
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push(username);
    url.query_pairs_mut()
        .clear()
        .append_pair("tab", "repositories")
        .append_pair("page", &page.to_string());
    Ok(url)
}

/// Keeps the links that point at a repository, in their original order.
///
/// Links without an `href` are skipped. Duplicates are kept.
pub fn filter_listing_links(hrefs: &[Option<String>]) -> Vec<RepositoryRef> {
    hrefs
        .iter()
        .flatten()
        .filter_map(|href| RepositoryRef::from_listing_href(href))
        .collect()
}

//! Scripted in-memory browsing session shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use discussions_enabler::{BrowserError, BrowserSession, Selectors, Settings};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// One page of the repository listing.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub hrefs: Vec<Option<String>>,
    pub has_next: bool,
    pub renders: bool,
}

impl ListingPage {
    pub fn new(hrefs: &[&str], has_next: bool) -> Self {
        Self {
            hrefs: hrefs.iter().map(|href| Some(href.to_string())).collect(),
            has_next,
            renders: true,
        }
    }

    pub fn broken() -> Self {
        Self {
            hrefs: Vec::new(),
            has_next: false,
            renders: false,
        }
    }
}

/// Settings page state of one repository.
#[derive(Debug, Clone)]
pub struct RepoSettings {
    pub checked: bool,
    pub renders: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Blank,
    Front,
    Listing(usize),
    Settings(String),
    Unknown,
}

/// Fake GitHub front-end keyed on the URL last navigated to.
pub struct ScriptedBrowser {
    selectors: Selectors,
    location: Location,
    pub signed_in: bool,
    pub listing: Vec<ListingPage>,
    pub repos: HashMap<String, RepoSettings>,
    pub navigations: Vec<String>,
    pub clicks: Vec<String>,
    pub closed: bool,
}

impl ScriptedBrowser {
    pub fn new() -> Self {
        Self {
            selectors: Selectors::default(),
            location: Location::Blank,
            signed_in: true,
            listing: Vec::new(),
            repos: HashMap::new(),
            navigations: Vec::new(),
            clicks: Vec::new(),
            closed: false,
        }
    }

    pub fn signed_out(mut self) -> Self {
        self.signed_in = false;
        self
    }

    pub fn with_page(mut self, page: ListingPage) -> Self {
        self.listing.push(page);
        self
    }

    pub fn with_repo(mut self, full_name: &str, checked: bool) -> Self {
        self.repos.insert(
            full_name.to_string(),
            RepoSettings {
                checked,
                renders: true,
            },
        );
        self
    }

    /// A repository whose settings page never shows the checkbox.
    pub fn with_locked_repo(mut self, full_name: &str) -> Self {
        self.repos.insert(
            full_name.to_string(),
            RepoSettings {
                checked: false,
                renders: false,
            },
        );
        self
    }

    pub fn is_enabled(&self, full_name: &str) -> bool {
        self.repos.get(full_name).is_some_and(|repo| repo.checked)
    }

    pub fn settings_navigations(&self) -> Vec<&str> {
        self.navigations
            .iter()
            .map(String::as_str)
            .filter(|url| url.contains("/settings"))
            .collect()
    }

    pub fn listing_navigations(&self) -> Vec<&str> {
        self.navigations
            .iter()
            .map(String::as_str)
            .filter(|url| url.contains("tab=repositories"))
            .collect()
    }

    fn locate(url: &Url) -> Location {
        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Location::Front,
            [_user] => {
                let page = url
                    .query_pairs()
                    .find(|(key, _)| key == "page")
                    .and_then(|(_, value)| value.parse().ok())
                    .unwrap_or(1);
                Location::Listing(page)
            }
            [owner, name, "settings"] => Location::Settings(format!("{owner}/{name}")),
            _ => Location::Unknown,
        }
    }

    fn listing_page(&self, page: usize) -> Option<&ListingPage> {
        page.checked_sub(1).and_then(|index| self.listing.get(index))
    }

    fn current_repo(&self) -> Option<&RepoSettings> {
        match &self.location {
            Location::Settings(name) => self.repos.get(name),
            _ => None,
        }
    }

    fn missing(selector: &str) -> BrowserError {
        BrowserError::Timeout {
            selector: selector.to_string(),
            timeout: Duration::ZERO,
        }
    }
}

#[async_trait]
impl BrowserSession for ScriptedBrowser {
    async fn navigate(&mut self, url: &Url) -> Result<(), BrowserError> {
        if self.closed {
            return Err(BrowserError::Closed);
        }
        self.navigations.push(url.to_string());
        self.location = Self::locate(url);
        Ok(())
    }

    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), BrowserError> {
        let present = match &self.location {
            Location::Front => selector == self.selectors.signed_in && self.signed_in,
            // Pages past the end of the script render an empty listing.
            Location::Listing(page) => {
                selector == self.selectors.repository_list
                    && self.listing_page(*page).map_or(true, |p| p.renders)
            }
            Location::Settings(_) => {
                selector == self.selectors.feature_checkbox
                    && self.current_repo().is_some_and(|repo| repo.renders)
            }
            Location::Blank | Location::Unknown => false,
        };

        if present {
            Ok(())
        } else {
            Err(BrowserError::Timeout {
                selector: selector.to_string(),
                timeout,
            })
        }
    }

    async fn attribute_values(
        &mut self,
        selector: &str,
        name: &str,
    ) -> Result<Vec<Option<String>>, BrowserError> {
        match &self.location {
            Location::Listing(page) if selector == self.selectors.repository_link && name == "href" => {
                Ok(self
                    .listing_page(*page)
                    .map(|p| p.hrefs.clone())
                    .unwrap_or_default())
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn is_visible(&mut self, selector: &str) -> Result<bool, BrowserError> {
        match &self.location {
            Location::Listing(page) if selector == self.selectors.next_page => {
                Ok(self.listing_page(*page).is_some_and(|p| p.has_next))
            }
            _ => Ok(false),
        }
    }

    async fn is_checked(&mut self, selector: &str) -> Result<bool, BrowserError> {
        if selector != self.selectors.feature_checkbox {
            return Err(Self::missing(selector));
        }
        self.current_repo()
            .filter(|repo| repo.renders)
            .map(|repo| repo.checked)
            .ok_or_else(|| Self::missing(selector))
    }

    async fn click(&mut self, selector: &str) -> Result<(), BrowserError> {
        let Location::Settings(name) = self.location.clone() else {
            return Err(Self::missing(selector));
        };
        if selector != self.selectors.feature_checkbox {
            return Err(Self::missing(selector));
        }

        let repo = self
            .repos
            .get_mut(&name)
            .filter(|repo| repo.renders)
            .ok_or_else(|| Self::missing(selector))?;
        repo.checked = !repo.checked;
        self.clicks.push(name);
        Ok(())
    }

    async fn close(&mut self) -> Result<(), BrowserError> {
        self.closed = true;
        Ok(())
    }
}

/// Default settings with the fixed delays removed.
pub fn test_settings() -> Settings {
    let mut settings = Settings::load(None).unwrap();
    settings.base_url = Url::parse("https://github.com/").unwrap();
    settings.timeouts.settle_delay_ms = 0;
    settings.timeouts.repository_delay_ms = 0;
    settings
}

//! CSS selectors for the GitHub web UI.

use serde::Deserialize;

/// CSS selectors used to locate elements on github.com pages.
///
/// GitHub changes its markup from time to time, so each selector can be
/// overridden from the settings file without a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Selectors {
    /// Container of the user's repository listing.
    pub repository_list: String,

    /// Repository links inside the listing.
    pub repository_link: String,

    /// Pagination control leading to the next listing page.
    pub next_page: String,

    /// Element that only renders for a signed-in session.
    pub signed_in: String,

    /// Checkbox controlling the Discussions feature on the settings page.
    pub feature_checkbox: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            repository_list: "div#user-repositories-list ul".to_string(),
            repository_link: "div#user-repositories-list ul li h3 a".to_string(),
            next_page: "a.next_page".to_string(),
            signed_in: "img.avatar-user".to_string(),
            feature_checkbox: "input#discussions-feature".to_string(),
        }
    }
}

impl Selectors {
    /// Returns the first selector that is blank, if any.
    pub(crate) fn first_blank(&self) -> Option<&'static str> {
        [
            ("repository-list", &self.repository_list),
            ("repository-link", &self.repository_link),
            ("next-page", &self.next_page),
            ("signed-in", &self.signed_in),
            ("feature-checkbox", &self.feature_checkbox),
        ]
        .into_iter()
        .find(|(_, selector)| selector.trim().is_empty())
        .map(|(name, _)| name)
    }
}

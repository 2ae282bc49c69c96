//! Repository identifiers.

use std::fmt;
use thiserror::Error;
use url::Url;

/// Errors raised while turning user input into repository identifiers.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Token is empty or whitespace.
    #[error("Repository name must not be empty")]
    EmptyToken,

    /// Token is not `name` or `owner/name`.
    #[error("Invalid repository '{token}': expected 'name' or 'owner/name'")]
    InvalidToken { token: String },
}

/// Characters that would end the URL path or split a name.
fn has_reserved_chars(part: &str) -> bool {
    part.chars()
        .any(|c| c == '#' || c == '?' || c == '%' || c.is_whitespace())
}

/// An `(owner, name)` pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryRef {
    /// Creates a reference from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses a user-supplied token.
    ///
    /// `owner/name` is taken as-is; a bare `name` is owned by `username`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] for empty tokens, empty owner or name
    /// parts, tokens with more than one `/`, and tokens containing `#`, `?`,
    /// `%` or whitespace.
    pub fn from_token(token: &str, username: &str) -> Result<Self, RepositoryError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(RepositoryError::EmptyToken);
        }

        if has_reserved_chars(token) {
            return Err(RepositoryError::InvalidToken {
                token: token.to_string(),
            });
        }

        let Some((owner, name)) = token.split_once('/') else {
            return Ok(Self::new(username, token));
        };

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(RepositoryError::InvalidToken {
                token: token.to_string(),
            });
        }
        Ok(Self::new(owner, name))
    }

    /// Extracts a repository from a link found in the repository listing.
    ///
    /// Only `/owner/name` paths qualify. Links with any other number of
    /// segments (organization pages, tabs) and links ending in `/settings`
    /// yield `None`. Absolute links are reduced to their path first.
    pub fn from_listing_href(href: &str) -> Option<Self> {
        let href = href.trim();
        let path = match Url::parse(href) {
            Ok(url) => url.path().to_string(),
            Err(_) => href.split(['?', '#']).next().unwrap_or_default().to_string(),
        };

        if path.ends_with("/settings") {
            return None;
        }

        let (owner, name) = path.strip_prefix('/')?.split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }

    /// Returns the `owner/name` form.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// URL of the features section of the repository settings page.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` cannot carry a path (e.g. `mailto:`).
    pub fn settings_url(&self, base_url: &Url) -> Result<Url, url::ParseError> {
        let mut url = base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend([self.owner.as_str(), self.name.as_str(), "settings"]);
        url.set_fragment(Some("features"));
        Ok(url)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Normalizes explicitly supplied tokens, preserving their order.
///
/// # Errors
///
/// Fails on the first token that cannot be parsed.
pub fn normalize_tokens<S: AsRef<str>>(
    tokens: &[S],
    username: &str,
) -> Result<Vec<RepositoryRef>, RepositoryError> {
    tokens
        .iter()
        .map(|token| RepositoryRef::from_token(token.as_ref(), username))
        .collect()
}

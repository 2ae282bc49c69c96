//! Browsing session abstraction.
//!
//! Discovery and feature toggling only talk to the web UI through
//! [`BrowserSession`]. The production implementation is
//! [`WebDriverSession`]; tests substitute a scripted session.

mod error;
mod webdriver;

pub use error::BrowserError;
pub use webdriver::WebDriverSession;

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// A single page context in an authenticated browser.
///
/// All methods take `&mut self`: one session drives one page and every call
/// is issued strictly after the previous one completed.
#[async_trait]
pub trait BrowserSession: Send {
    /// Loads `url` in the current page.
    async fn navigate(&mut self, url: &Url) -> Result<(), BrowserError>;

    /// Waits until an element matching `selector` is present.
    ///
    /// Returns [`BrowserError::Timeout`] if nothing matches within `timeout`.
    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), BrowserError>;

    /// Reads attribute `name` of every element matching `selector`, in
    /// document order. Elements without the attribute yield `None`.
    async fn attribute_values(
        &mut self,
        selector: &str,
        name: &str,
    ) -> Result<Vec<Option<String>>, BrowserError>;

    /// Whether the first element matching `selector` exists and is displayed.
    async fn is_visible(&mut self, selector: &str) -> Result<bool, BrowserError>;

    /// Whether the checkbox matching `selector` is checked.
    async fn is_checked(&mut self, selector: &str) -> Result<bool, BrowserError>;

    /// Clicks the first element matching `selector`.
    async fn click(&mut self, selector: &str) -> Result<(), BrowserError>;

    /// Ends the session and releases the browser.
    async fn close(&mut self) -> Result<(), BrowserError>;
}

//! WebDriver-backed browsing session.

use super::{BrowserError, BrowserSession};
use async_trait::async_trait;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// A browsing session driven through a WebDriver server
/// (chromedriver, geckodriver or a Selenium grid).
pub struct WebDriverSession {
    client: Option<Client>,
}

impl WebDriverSession {
    /// Opens a new browser session on the WebDriver server at `webdriver_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Session`] if the server is unreachable or
    /// refuses the requested capabilities.
    pub async fn connect(webdriver_url: &Url, headless: bool) -> Result<Self, BrowserError> {
        info!(url = %webdriver_url, headless, "Opening browser session");

        let mut builder = ClientBuilder::native();
        builder.capabilities(build_capabilities(headless));
        let client = builder.connect(webdriver_url.as_str()).await?;

        Ok(Self {
            client: Some(client),
        })
    }

    fn client(&self) -> Result<&Client, BrowserError> {
        self.client.as_ref().ok_or(BrowserError::Closed)
    }
}

/// Builds the capabilities map requested from the WebDriver server.
///
/// Both Chrome and Firefox options are sent; each driver ignores the other's.
fn build_capabilities(headless: bool) -> Map<String, Value> {
    let mut capabilities = Map::new();
    if headless {
        capabilities.insert(
            "goog:chromeOptions".to_string(),
            json!({ "args": ["--headless=new", "--window-size=1280,1024"] }),
        );
        capabilities.insert(
            "moz:firefoxOptions".to_string(),
            json!({ "args": ["-headless"] }),
        );
    }
    capabilities
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn navigate(&mut self, url: &Url) -> Result<(), BrowserError> {
        debug!(url = %url, "Navigating");
        self.client()?.goto(url.as_str()).await?;
        Ok(())
    }

    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), BrowserError> {
        let result = self
            .client()?
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(CmdError::WaitTimeout) => Err(BrowserError::Timeout {
                selector: selector.to_string(),
                timeout,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn attribute_values(
        &mut self,
        selector: &str,
        name: &str,
    ) -> Result<Vec<Option<String>>, BrowserError> {
        let elements = self.client()?.find_all(Locator::Css(selector)).await?;

        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(element.attr(name).await?);
        }
        Ok(values)
    }

    async fn is_visible(&mut self, selector: &str) -> Result<bool, BrowserError> {
        let elements = self.client()?.find_all(Locator::Css(selector)).await?;
        match elements.first() {
            Some(element) => Ok(element.is_displayed().await?),
            None => Ok(false),
        }
    }

    async fn is_checked(&mut self, selector: &str) -> Result<bool, BrowserError> {
        let element = self.client()?.find(Locator::Css(selector)).await?;
        Ok(element.is_selected().await?)
    }

    async fn click(&mut self, selector: &str) -> Result<(), BrowserError> {
        let element = self.client()?.find(Locator::Css(selector)).await?;
        element.click().await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), BrowserError> {
        if let Some(client) = self.client.take() {
            info!("Closing browser session");
            client.close().await?;
        }
        Ok(())
    }
}

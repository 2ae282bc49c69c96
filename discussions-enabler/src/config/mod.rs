//! Settings loading.
//!
//! Settings are resolved from built-in defaults, an optional TOML file and
//! the environment, in increasing order of precedence. The CLI applies its
//! own flags on top of the result.
//!
//! ```toml
//! base-url = "https://github.com/"
//! webdriver-url = "http://localhost:4444"
//! headless = false
//!
//! [timeouts]
//! render-timeout-secs = 10
//! login-timeout-secs = 180
//! settle-delay-ms = 1000
//! repository-delay-ms = 1000
//!
//! [selectors]
//! feature-checkbox = "input#discussions-feature"
//! ```

mod error;
mod selectors;
mod timeouts;

pub use error::ConfigError;
pub use selectors::Selectors;
pub use timeouts::Timeouts;

use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Environment variable overriding the WebDriver server URL.
pub const WEBDRIVER_URL_ENV: &str = "DISCUSSIONS_ENABLER_WEBDRIVER_URL";

/// Default GitHub web front-end.
pub const DEFAULT_BASE_URL: &str = "https://github.com/";

/// Default WebDriver endpoint (chromedriver/geckodriver started with `--port=4444`).
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// On-disk representation of the settings file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
struct SettingsFile {
    base_url: Option<String>,
    webdriver_url: Option<String>,
    headless: Option<bool>,
    timeouts: Timeouts,
    selectors: Selectors,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root of the GitHub web front-end.
    pub base_url: Url,

    /// WebDriver server to open the browsing session on.
    pub webdriver_url: Url,

    /// Whether the browser runs without a visible window.
    pub headless: bool,

    /// Wait bounds and fixed delays.
    pub timeouts: Timeouts,

    /// Element selectors.
    pub selectors: Selectors,
}

impl Settings {
    /// Loads settings, reading `path` when given.
    ///
    /// Without a path the built-in defaults are used. The
    /// [`WEBDRIVER_URL_ENV`] environment variable takes precedence over
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if a
    /// value fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => read_settings_file(path)?,
            None => SettingsFile::default(),
        };
        Self::resolve(file)
    }

    /// Replaces the WebDriver server URL.
    pub fn with_webdriver_url(mut self, webdriver_url: Url) -> Self {
        self.webdriver_url = webdriver_url;
        self
    }

    /// Sets whether the browser runs headless.
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    fn resolve(file: SettingsFile) -> Result<Self, ConfigError> {
        let base_url = parse_url(
            "base-url",
            file.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let webdriver_url = match std::env::var(WEBDRIVER_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                debug!(url = %value, "Using WebDriver URL from environment");
                parse_url(WEBDRIVER_URL_ENV, value.trim())?
            }
            _ => parse_url(
                "webdriver-url",
                file.webdriver_url.as_deref().unwrap_or(DEFAULT_WEBDRIVER_URL),
            )?,
        };

        validate_timeouts(&file.timeouts)?;
        if let Some(field) = file.selectors.first_blank() {
            return Err(ConfigError::ValidationError {
                field,
                message: "selector must not be empty".to_string(),
            });
        }

        Ok(Self {
            base_url,
            webdriver_url,
            headless: file.headless.unwrap_or(false),
            timeouts: file.timeouts,
            selectors: file.selectors,
        })
    }
}

fn read_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    debug!(path = %path.display(), "Loading settings file");
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::TomlError {
        path: path.display().to_string(),
        source,
    })
}

/// Parses an http(s) URL setting.
fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            field,
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

fn validate_timeouts(timeouts: &Timeouts) -> Result<(), ConfigError> {
    if timeouts.render_timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "render-timeout-secs",
            message: "must be greater than zero".to_string(),
        });
    }
    if timeouts.login_timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "login-timeout-secs",
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod browser;
pub mod config;
pub mod discovery;
pub mod repository;
pub mod runner;
pub mod summary;
pub mod toggle;

pub use browser::{BrowserError, BrowserSession, WebDriverSession};
pub use config::{ConfigError, Selectors, Settings, Timeouts, WEBDRIVER_URL_ENV};
pub use discovery::{discover_repositories, filter_listing_links, listing_url, DiscoveryError};
pub use repository::{normalize_tokens, RepositoryError, RepositoryRef};
pub use runner::{RepositorySelection, Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
pub use toggle::{enable_feature, ToggleError, ToggleStatus};

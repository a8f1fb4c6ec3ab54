//! Run configuration.
//!
//! Every constant the pipeline depends on lives here so deployments and
//! tests can substitute values without code changes. Defaults match the
//! production scrape of sailboatlistings.com.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use url::Url;

/// Self-link kept when `FEED_SELF_URL` is not configured. The feed is
/// still valid with it, just not discoverable at a real host.
pub const SELF_URL_PLACEHOLDER: &str =
    "https://YOUR-USERNAME.github.io/sailboatlistings/feed.xml";

/// Configuration for one feed-generation run.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Listings-index page fetched at the start of the run.
    pub listings_url: String,

    /// Scheme+host prefix applied to relative links and image paths.
    pub site_origin: String,

    /// Channel title.
    pub feed_title: String,

    /// Channel description.
    pub feed_description: String,

    /// Channel link.
    pub feed_link: String,

    /// Published URL of the feed itself (`atom:link rel="self"`).
    ///
    /// Per-deployment value, see [`FeedConfig::from_env`].
    pub self_url: String,

    /// Channel language.
    pub language: String,

    /// Output file, fully overwritten on every run.
    pub output_path: PathBuf,

    /// Maximum number of retained listings.
    pub max_listings: usize,

    /// Timeout for the single HTTP fetch.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            listings_url: "https://www.sailboatlistings.com/sailboats_for_sale/".to_string(),
            site_origin: "https://www.sailboatlistings.com".to_string(),
            feed_title: "Sailboat Listings".to_string(),
            feed_description: "Latest sailboat listings from sailboatlistings.com".to_string(),
            feed_link: "https://www.sailboatlistings.com/sailboats_for_sale/".to_string(),
            self_url: SELF_URL_PLACEHOLDER.to_string(),
            language: "en-us".to_string(),
            output_path: PathBuf::from("feed.xml"),
            max_listings: 50,
            timeout: Duration::from_secs(30),
        }
    }
}

impl FeedConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the environment.
    ///
    /// `FEED_SELF_URL` is the only externalized value; everything else is
    /// fixed at build time. When it is unset the placeholder self-link is
    /// kept; when it is set but not a valid URL, loading fails.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let mut config = Self::default();
        if let Ok(value) = env::var("FEED_SELF_URL") {
            Url::parse(&value).context("FEED_SELF_URL must be a valid URL")?;
            config.self_url = value;
        }
        Ok(config)
    }

    /// True while the self-link still carries the placeholder host.
    pub fn self_url_is_placeholder(&self) -> bool {
        self.self_url == SELF_URL_PLACEHOLDER
    }

    /// Set the listings-index URL.
    pub fn with_listings_url(mut self, url: impl Into<String>) -> Self {
        self.listings_url = url.into();
        self
    }

    /// Set the origin prefixed onto relative links.
    pub fn with_site_origin(mut self, origin: impl Into<String>) -> Self {
        self.site_origin = origin.into();
        self
    }

    /// Set the feed's published self URL.
    pub fn with_self_url(mut self, url: impl Into<String>) -> Self {
        self.self_url = url.into();
        self
    }

    /// Set the output file path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the retained-listing cap.
    pub fn with_max_listings(mut self, max: usize) -> Self {
        self.max_listings = max;
        self
    }

    /// Set the fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_constants() {
        let config = FeedConfig::new();

        assert_eq!(
            config.listings_url,
            "https://www.sailboatlistings.com/sailboats_for_sale/"
        );
        assert_eq!(config.site_origin, "https://www.sailboatlistings.com");
        assert_eq!(config.feed_title, "Sailboat Listings");
        assert_eq!(config.language, "en-us");
        assert_eq!(config.output_path, PathBuf::from("feed.xml"));
        assert_eq!(config.max_listings, 50);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.self_url_is_placeholder());
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = FeedConfig::new()
            .with_listings_url("http://127.0.0.1:8080/boats")
            .with_site_origin("http://127.0.0.1:8080")
            .with_self_url("https://feeds.example.org/boats.xml")
            .with_output_path("/tmp/boats.xml")
            .with_max_listings(3)
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.listings_url, "http://127.0.0.1:8080/boats");
        assert_eq!(config.site_origin, "http://127.0.0.1:8080");
        assert_eq!(config.self_url, "https://feeds.example.org/boats.xml");
        assert!(!config.self_url_is_placeholder());
        assert_eq!(config.output_path, PathBuf::from("/tmp/boats.xml"));
        assert_eq!(config.max_listings, 3);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}

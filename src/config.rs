use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

use crate::network_catalog::NetworkCatalog;

pub const DEFAULT_STATIONS_URL: &str = "https://www.mareografico.it/en/stations.html";
pub const DEFAULT_SESSION_COOKIE: &str = "PHPSESSID";
pub const DEFAULT_SELECTOR_PREFIX: &str = "MG";

/// The optional `MAREOGRAFICO_*` env vars that override the site defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ScrapingEnv {
    stations_url: Option<String>,
    session_cookie: Option<String>,
    selector_prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapingConfig {
    pub stations_url: String,
    pub session_cookie: String,
    /// Prepended to the session id to name the network selector cookie.
    pub selector_prefix: String,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env_prefixed("MAREOGRAFICO_")?;
        Ok(Self::from_env(scraping_env))
    }

    pub fn from_env(scraping_env: ScrapingEnv) -> Self {
        let defaults = Self::default();
        Self {
            stations_url: scraping_env.stations_url.unwrap_or(defaults.stations_url),
            session_cookie: scraping_env
                .session_cookie
                .unwrap_or(defaults.session_cookie),
            selector_prefix: scraping_env
                .selector_prefix
                .unwrap_or(defaults.selector_prefix),
        }
    }

    pub fn with_stations_url(mut self, stations_url: impl Into<String>) -> Self {
        self.stations_url = stations_url.into();
        self
    }
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            stations_url: DEFAULT_STATIONS_URL.to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            selector_prefix: DEFAULT_SELECTOR_PREFIX.to_string(),
        }
    }
}

/// Networks the scraper walks, fixed at startup.
pub fn default_network_catalog() -> NetworkCatalog {
    NetworkCatalog::known()
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env_prefixed(prefix: &str) -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config = envy::prefixed(prefix)
            .from_env::<Self>()
            .context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_live_site() {
        let config = ScrapingConfig::from_env(ScrapingEnv::default());
        assert_eq!(config.stations_url, DEFAULT_STATIONS_URL);
        assert_eq!(config.session_cookie, "PHPSESSID");
        assert_eq!(config.selector_prefix, "MG");
    }

    #[test]
    fn env_values_override_defaults() {
        let scraping_env = ScrapingEnv {
            stations_url: Some("http://localhost:8080/en/stations.html".to_string()),
            session_cookie: None,
            selector_prefix: Some("XX".to_string()),
        };
        let config = ScrapingConfig::from_env(scraping_env);
        assert_eq!(config.stations_url, "http://localhost:8080/en/stations.html");
        assert_eq!(config.session_cookie, "PHPSESSID");
        assert_eq!(config.selector_prefix, "XX");
    }
}

mod mareografico_scraper;
mod scrape_error;
mod text_manipulators;

pub mod config;
pub mod cookie_jar;
pub mod network_catalog;
pub mod network_selector;
pub mod requests;
pub mod scraping_context;
pub mod station_scraper;

pub use config::ScrapingConfig;
pub use cookie_jar::CookieJar;
pub use mareografico_scraper::MareograficoScraper;
pub use network_catalog::{Network, NetworkCatalog, NetworkId, available_networks};
pub use network_selector::{NetworkSelector, select_network_cookies};
pub use requests::PageResponse;
pub use scrape_error::ScrapeError;
pub use scraping_context::ScrapingContext;
pub use station_scraper::{Station, StationRecord, available_stations};

use log::info;

use crate::{
    ScrapeError,
    network_catalog::{NetworkCatalog, NetworkId},
    network_selector::select_network_cookies,
    requests::PageResponse,
    scraping_context::ScrapingContext,
    station_scraper::{StationRecord, available_stations},
};

pub struct MareograficoScraper {
    context: ScrapingContext,
}

impl MareograficoScraper {
    pub fn new(context: ScrapingContext) -> Self {
        Self { context }
    }

    pub fn networks(&self) -> &NetworkCatalog {
        &self.context.network_catalog
    }

    /// Anonymous GET of the stations page. Its cookies carry the session.
    pub async fn get_base_response(&self) -> Result<PageResponse, ScrapeError> {
        let url = &self.context.scraping_config.stations_url;
        self.context.request_client.fetch_page(url, None).await
    }

    /// Fetches the page of `network_id`'s default (first) station.
    ///
    /// Without a `base_response` a fresh session is bootstrapped first.
    pub async fn get_network_response(
        &self,
        network_id: NetworkId,
        base_response: Option<&PageResponse>,
    ) -> Result<PageResponse, ScrapeError> {
        self.context.network_catalog.ensure_known(network_id)?;

        let bootstrapped;
        let base = match base_response {
            Some(base) => base,
            None => {
                bootstrapped = self.get_base_response().await?;
                &bootstrapped
            }
        };

        let config = &self.context.scraping_config;
        let cookies = select_network_cookies(config, &base.cookies, network_id)?;
        self.context
            .request_client
            .fetch_page(&config.stations_url, Some(&cookies))
            .await
    }

    /// Walks every network of the catalog on one session, in catalog order.
    pub async fn scrape_all_stations(&self) -> Result<Vec<StationRecord>, ScrapeError> {
        let base_response = self.get_base_response().await?;
        self.scrape_networks(&base_response).await
    }

    pub async fn scrape_networks(
        &self,
        base_response: &PageResponse,
    ) -> Result<Vec<StationRecord>, ScrapeError> {
        let mut records = vec![];
        for network in self.context.network_catalog.iter() {
            let page = self
                .get_network_response(network.id, Some(base_response))
                .await?;
            let stations = available_stations(&page.text)?;
            info!(
                "{} (id {}): {} station(s)",
                network.label,
                network.id,
                stations.len()
            );
            records.extend(
                stations
                    .into_iter()
                    .map(|station| StationRecord::new(network, station)),
            );
        }
        Ok(records)
    }
}

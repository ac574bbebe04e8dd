use crate::{
    config::{ScrapingConfig, default_network_catalog},
    network_catalog::NetworkCatalog,
    requests::RequestClient,
};

pub struct ScrapingContext {
    pub scraping_config: ScrapingConfig,
    pub network_catalog: NetworkCatalog,
    pub request_client: RequestClient,
}

impl ScrapingContext {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_config = ScrapingConfig::new()?;
        Self::with_parts(scraping_config, default_network_catalog())
    }

    pub fn with_parts(
        scraping_config: ScrapingConfig,
        network_catalog: NetworkCatalog,
    ) -> anyhow::Result<Self> {
        let request_client = RequestClient::new()?;
        Ok(ScrapingContext {
            scraping_config,
            network_catalog,
            request_client,
        })
    }
}

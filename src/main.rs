use anyhow::Context;
use dotenv::dotenv;
use log::{LevelFilter, info};
use mareografico::{MareograficoScraper, ScrapingContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let context = ScrapingContext::new()?;
    info!(
        "scraping {} network(s) from {}",
        context.network_catalog.len(),
        context.scraping_config.stations_url
    );
    let scraper = MareograficoScraper::new(context);
    let records = scraper
        .scrape_all_stations()
        .await
        .context("failed to scrape stations")?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    info!("scraped {} station(s)", records.len());
    Ok(())
}

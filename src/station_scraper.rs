use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::{
    ScrapeError,
    network_catalog::{Network, NetworkId},
    text_manipulators::{extract_attr, extract_text},
};

// Station list in the page sidebar.
static STATION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.dM > ul > li").expect("valid station selector"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationRecord {
    pub network_id: NetworkId,
    pub network_label: String,
    pub station_id: String,
    pub station_label: String,
}

impl StationRecord {
    pub fn new(network: &Network, station: Station) -> Self {
        Self {
            network_id: network.id,
            network_label: network.label.clone(),
            station_id: station.id,
            station_label: station.label,
        }
    }
}

/// Reads the (id, label) pairs of the stations listed on a network page, in page order.
///
/// A page without the station list yields an empty vec. A listed station
/// without an `id` attribute is an error.
pub fn available_stations(html: &str) -> Result<Vec<Station>, ScrapeError> {
    let document = Html::parse_document(html);
    document
        .select(&STATION_SELECTOR)
        .map(|item| {
            let label = extract_text(item);
            match extract_attr(item, "id") {
                Some(id) => Ok(Station { id, label }),
                None => Err(ScrapeError::StationWithoutId { label }),
            }
        })
        .collect()
}

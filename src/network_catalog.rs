use crate::ScrapeError;

pub type NetworkId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub id: NetworkId,
    pub label: String,
}

impl Network {
    pub fn new(label: impl Into<String>, id: NetworkId) -> Self {
        Self {
            label: label.into(),
            id,
        }
    }
}

/// Ordered table of network label -> network id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkCatalog {
    networks: Vec<Network>,
}

impl NetworkCatalog {
    pub fn new(networks: Vec<Network>) -> Self {
        Self { networks }
    }

    /// The networks the site currently exposes in its switcher.
    pub fn known() -> Self {
        Self::new(vec![
            Network::new("National Tide Gauge Network", 1),
            Network::new("National Wave Buoy Network", 4),
            Network::new("ADSP MAC Network", 9),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.networks.iter()
    }

    pub fn ids(&self) -> Vec<NetworkId> {
        self.networks.iter().map(|network| network.id).collect()
    }

    pub fn contains(&self, id: NetworkId) -> bool {
        self.networks.iter().any(|network| network.id == id)
    }

    pub fn label_of(&self, id: NetworkId) -> Option<&str> {
        self.networks
            .iter()
            .find(|network| network.id == id)
            .map(|network| network.label.as_str())
    }

    pub fn ensure_known(&self, id: NetworkId) -> Result<(), ScrapeError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(ScrapeError::UnknownNetwork(id))
        }
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl Default for NetworkCatalog {
    fn default() -> Self {
        Self::known()
    }
}

/// Returns the network catalog.
///
/// Only the built-in table is available: passing page markup is reserved for
/// reading the switcher out of the HTML and is rejected for now. Empty markup
/// counts as no markup.
pub fn available_networks(html: Option<&str>) -> Result<NetworkCatalog, ScrapeError> {
    match html {
        None | Some("") => Ok(NetworkCatalog::known()),
        Some(_) => Err(ScrapeError::DiscoveryNotSupported),
    }
}

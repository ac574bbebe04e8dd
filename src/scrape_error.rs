use std::string::FromUtf8Error;

use thiserror::Error;

use crate::network_catalog::NetworkId;

/// Everything that can go wrong while scraping the stations pages.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("network id {0} is not one of the known networks")]
    UnknownNetwork(NetworkId),
    #[error("discovering networks from page markup is not supported yet")]
    DiscoveryNotSupported,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("session cookie `{name}` missing from base response")]
    MissingSessionCookie { name: String },
    #[error("network selector cookie `{name}` missing from base response")]
    MissingSelectorCookie { name: String },
    #[error("network selector cookie `{name}` is not percent-encoded UTF-8: {source}")]
    UndecodableSelector {
        name: String,
        #[source]
        source: FromUtf8Error,
    },
    #[error("network selector value `{value}` has {found} field(s), expected at least 2")]
    ShortSelector { value: String, found: usize },
    #[error("station list item {label:?} has no `id` attribute")]
    StationWithoutId { label: String },
}

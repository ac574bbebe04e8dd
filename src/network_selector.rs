use log::debug;

use crate::{
    ScrapeError, config::ScrapingConfig, cookie_jar::CookieJar, network_catalog::NetworkId,
};

pub const FIELD_DELIMITER: &str = "][";
/// Position of the selected network id inside the selector fields.
pub const NETWORK_FIELD: usize = 1;

/// Decoded value of the `MG<session id>` cookie the site's network switcher writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSelector {
    fields: Vec<String>,
}

impl NetworkSelector {
    pub fn from_fields(fields: Vec<String>) -> Result<Self, ScrapeError> {
        if fields.len() <= NETWORK_FIELD {
            return Err(ScrapeError::ShortSelector {
                value: fields.join(FIELD_DELIMITER),
                found: fields.len(),
            });
        }
        Ok(Self { fields })
    }

    /// Parses an already percent-decoded value.
    pub fn parse(decoded: &str) -> Result<Self, ScrapeError> {
        Self::from_fields(decoded.split(FIELD_DELIMITER).map(str::to_string).collect())
    }

    /// Parses the raw cookie value as the site sends it.
    pub fn decode(cookie_name: &str, encoded: &str) -> Result<Self, ScrapeError> {
        let decoded =
            urlencoding::decode(encoded).map_err(|source| ScrapeError::UndecodableSelector {
                name: cookie_name.to_string(),
                source,
            })?;
        Self::parse(&decoded)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn network(&self) -> &str {
        &self.fields[NETWORK_FIELD]
    }

    pub fn with_network(mut self, network_id: NetworkId) -> Self {
        self.fields[NETWORK_FIELD] = network_id.to_string();
        self
    }

    pub fn to_decoded(&self) -> String {
        self.fields.join(FIELD_DELIMITER)
    }

    /// Percent-encodes the joined fields. `/` is left literal.
    pub fn encode(&self) -> String {
        urlencoding::encode(&self.to_decoded()).replace("%2F", "/")
    }
}

pub fn selector_cookie_name(config: &ScrapingConfig, session_id: &str) -> String {
    format!("{}{}", config.selector_prefix, session_id)
}

/// Builds the cookie jar that makes the site serve `network_id`'s default station page.
///
/// Every base cookie is carried over except the selector, which is re-appended
/// with the network field overwritten.
pub fn select_network_cookies(
    config: &ScrapingConfig,
    base: &CookieJar,
    network_id: NetworkId,
) -> Result<CookieJar, ScrapeError> {
    let session_id = base.get(&config.session_cookie).ok_or_else(|| {
        ScrapeError::MissingSessionCookie {
            name: config.session_cookie.clone(),
        }
    })?;
    let name = selector_cookie_name(config, session_id);
    let current = base
        .get(&name)
        .ok_or_else(|| ScrapeError::MissingSelectorCookie { name: name.clone() })?;

    let selector = NetworkSelector::decode(&name, current)?;
    debug!(
        "switching selector `{}` from network {} to {}",
        name,
        selector.network(),
        network_id
    );
    let encoded = selector.with_network(network_id).encode();

    let mut jar = base.clone();
    jar.remove(&name);
    jar.set(name, encoded);
    Ok(jar)
}

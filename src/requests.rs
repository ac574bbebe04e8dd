use log::{debug, warn};
use reqwest::{Client, ClientBuilder, StatusCode, header::COOKIE};

use crate::{ScrapeError, cookie_jar::CookieJar};

/// A fully read response: what is left of a request once the body is consumed.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub url: String,
    pub status: StatusCode,
    pub cookies: CookieJar,
    pub text: String,
}

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new() -> Result<Self, ScrapeError> {
        // Cookies are threaded through by hand; the client must not keep its own store.
        let client = ClientBuilder::new().build()?;
        Ok(Self { client })
    }

    pub async fn fetch_page(
        &self,
        url: &str,
        cookies: Option<&CookieJar>,
    ) -> Result<PageResponse, ScrapeError> {
        let mut request = self.client.get(url);
        if let Some(jar) = cookies.filter(|jar| !jar.is_empty()) {
            debug!("GET {} with {} cookie(s)", url, jar.len());
            request = request.header(COOKIE, jar.to_header_value());
        } else {
            debug!("GET {}", url);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("GET {} answered {}", url, status);
        }
        let cookies = CookieJar::from_response(&response);
        let final_url = response.url().to_string();
        let text = response.text().await?;
        Ok(PageResponse {
            url: final_url,
            status,
            cookies,
            text,
        })
    }
}

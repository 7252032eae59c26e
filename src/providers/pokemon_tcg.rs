use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

use super::ProviderResult;

/// One raw reply from the cards endpoint.
///
/// Status and body are kept verbatim: the report layer branches on the
/// status itself and truncates the body text for non-success replies.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Client for the Pokemon TCG card catalog API.
pub struct PokemonTcgProvider {
    client: Client,
    cards_url: String,
}

impl PokemonTcgProvider {
    pub const CARDS_URL: &'static str = "https://api.pokemontcg.io/v2/cards";

    /// Upper bound on the one network call this provider ever makes.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new() -> Self {
        Self::with_endpoint(Self::CARDS_URL.to_string(), Self::REQUEST_TIMEOUT)
    }

    /// Build a provider against a custom endpoint and timeout.
    pub fn with_endpoint(cards_url: String, timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("pokemon-tcg-check/0.1 (https://pokemontcg.io)"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!("client builder failed ({}), using default client", err);
                Client::new()
            });

        Self { client, cards_url }
    }

    /// Send the single GET with `q` and `pageSize` query parameters.
    ///
    /// Exactly one network attempt; no retries, no backoff. Any reply that
    /// makes it back, whatever its status, is returned as an [`ApiReply`].
    pub fn search_cards(&self, query: &str, page_size: u32) -> ProviderResult<ApiReply> {
        debug!("GET {} q={} pageSize={}", self.cards_url, query, page_size);

        let page_size = page_size.to_string();
        let response = self
            .client
            .get(&self.cards_url)
            .query(&[("q", query), ("pageSize", page_size.as_str())])
            .send()?;

        let status = response.status().as_u16();
        debug!("{} replied with status {}", self.cards_url, status);

        let body = response.text()?;
        Ok(ApiReply { status, body })
    }
}

impl Default for PokemonTcgProvider {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::domain::QuoteBatch;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::parser::parse_quotes;
use crate::request::build_request_url;
use crate::QuoteError;

/// Client for the remote quote service.
///
/// Holds no state between calls; clones share the underlying transport.
#[derive(Clone)]
pub struct QuoteClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for QuoteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteClient {
    /// Client with the default endpoint, a 5 second timeout and a reqwest transport.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            http_client: Arc::new(ReqwestHttpClient::new()),
        }
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, QuoteError> {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(
        config: ClientConfig,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<Self, QuoteError> {
        config.validate()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL that [`get_quotes`](Self::get_quotes) would request for `symbols`.
    pub fn request_url<S: AsRef<str>>(&self, symbols: &[S]) -> String {
        build_request_url(&self.config.base_url, symbols)
    }

    /// Fetch one quote per row the service returns for `symbols`.
    ///
    /// The batch is sized to the parsed rows, which may be fewer than the
    /// symbols requested. Any transport failure or non-2xx status fails the
    /// whole call.
    pub async fn get_quotes<S: AsRef<str>>(&self, symbols: &[S]) -> Result<QuoteBatch, QuoteError> {
        let url = self.request_url(symbols);
        tracing::debug!(%url, symbols = symbols.len(), "requesting quotes");

        let request = HttpRequest::get(url)
            .with_header("user-agent", self.config.user_agent.as_str())
            .with_timeout_ms(self.config.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::debug!(%error, kind = ?error.kind(), "quote transport failed");
            QuoteError::from(error)
        })?;

        if !response.is_success() {
            return Err(QuoteError::Status {
                status: response.status,
            });
        }

        let quotes = parse_quotes(&response.body);
        if quotes.len() < symbols.len() {
            tracing::warn!(
                requested = symbols.len(),
                returned = quotes.len(),
                "quote service returned fewer rows than symbols requested"
            );
        } else {
            tracing::debug!(returned = quotes.len(), "parsed quote rows");
        }

        Ok(QuoteBatch::new(quotes, symbols.len()))
    }
}

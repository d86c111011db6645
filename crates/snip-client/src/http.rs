//! HttpClient - concrete [`ShortenerApi`] implementation over reqwest

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use snip_core::prelude::*;
use snip_core::{ShortenRequest, ShortenResponse, UrlDetails, UrlHistoryItem};

use crate::api::ShortenerApi;
use crate::endpoints::Endpoints;

const USER_AGENT: &str = concat!("snip/", env!("CARGO_PKG_VERSION"));

/// Timeout for [`ShortenerApi::ping`] only; regular calls use the
/// configured timeout (none by default).
const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// How an error response is turned into a message
#[derive(Debug, Clone, Copy)]
enum FailureDetail {
    /// Use the response body text (the backend's own error message)
    Body,
    /// Use the HTTP status reason phrase
    StatusText,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpClient {
    /// Create a client without a request timeout
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        Self::with_timeout(endpoints, None)
    }

    pub fn with_timeout(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, endpoints })
    }

    /// Send a request and turn transport failures and non-2xx statuses into errors
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        action: &str,
        detail: FailureDetail,
    ) -> Result<Response> {
        let response = request.send().await.map_err(network_error)?;
        let status = response.status();
        debug!("{} -> {}", action, status);

        if status.is_success() {
            return Ok(response);
        }

        let reason = match detail {
            FailureDetail::Body => {
                let body = response.text().await.unwrap_or_default();
                let body = body.trim();
                if body.is_empty() {
                    status_text(status)
                } else {
                    body.to_string()
                }
            }
            FailureDetail::StatusText => status_text(status),
        };
        warn!("{} failed with {}: {}", action, status, reason);
        Err(Error::http(status.as_u16(), format!("Failed to {action}: {reason}")))
    }

    /// Decode a JSON list body; the backend encodes an empty list as `null`
    async fn list<T: DeserializeOwned>(response: Response) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = decode(response).await?;
        Ok(items.unwrap_or_default())
    }
}

impl ShortenerApi for HttpClient {
    async fn create_short_url(&self, request: &ShortenRequest) -> Result<ShortenResponse> {
        let url = self.endpoints.api_url("/api/shorten");
        debug!("POST {} {:?}", url, request);
        let response = self
            .send(
                self.client.post(&url).json(request),
                "create short URL",
                FailureDetail::Body,
            )
            .await?;
        let created: ShortenResponse = decode(response).await?;
        info!("Created short URL {} -> {}", created.code, created.original_url);
        Ok(created)
    }

    async fn get_url_details(&self, code: &str) -> Result<UrlDetails> {
        let url = self.endpoints.url_details(code);
        debug!("GET {}", url);
        let response = self
            .send(
                self.client.get(&url),
                "get URL details",
                FailureDetail::StatusText,
            )
            .await?;
        decode(response).await
    }

    async fn get_all_urls(&self) -> Result<Vec<UrlDetails>> {
        let url = self.endpoints.api_url("/api/urls");
        debug!("GET {}", url);
        let response = self
            .send(self.client.get(&url), "get URLs", FailureDetail::StatusText)
            .await?;
        Self::list(response).await
    }

    async fn delete_url(&self, code: &str) -> Result<()> {
        let url = self.endpoints.url_details(code);
        debug!("DELETE {}", url);
        self.send(
            self.client.delete(&url),
            "delete URL",
            FailureDetail::StatusText,
        )
        .await?;
        info!("Deleted short URL {}", code);
        Ok(())
    }

    async fn get_url_history(&self) -> Result<Vec<UrlHistoryItem>> {
        let url = self.endpoints.api_url("/api/history");
        debug!("GET {}", url);
        let response = self
            .send(
                self.client.get(&url),
                "get URL history",
                FailureDetail::StatusText,
            )
            .await?;
        Self::list(response).await
    }

    async fn ping(&self) -> bool {
        let url = self.endpoints.api_url("/api/urls");
        match self.client.get(&url).timeout(PING_TIMEOUT).send().await {
            Ok(response) => {
                debug!("ping {} -> {}", url, response.status());
                true
            }
            Err(e) => {
                debug!("ping {} failed: {}", url, e);
                false
            }
        }
    }

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(network_error)?;
    serde_json::from_slice(&bytes).map_err(|e| Error::decode(e.to_string()))
}

fn network_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::network("request timed out")
    } else if e.is_connect() {
        Error::network(format!("could not connect to server ({})", e))
    } else {
        Error::network(e.to_string())
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

//! HTTP client construction for a Weaviate instance.
//!
//! Every request carries the API key as a bearer token and is bounded by the
//! configured timeout. The gRPC endpoint is validated by the settings loader
//! and recorded here, but all calls go over the REST API.
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, Url};
use tracing::info;

use randovec_core::config::ConnectionSettings;
use randovec_core::error::{Error, Result};

pub struct WeaviateClient {
    pub(crate) http: Client,
    base_url: String,
    grpc_host: String,
}

impl WeaviateClient {
    /// Build a client. Fails on a malformed endpoint or API key; no request is sent.
    pub fn connect(settings: &ConnectionSettings) -> Result<Self> {
        let base_url = base_url(settings)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.api_key))
            .map_err(|_| Error::Connection("API key contains characters not allowed in an HTTP header".to_string()))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Connection(format!("building HTTP client: {e}")))?;

        info!(endpoint = %base_url, grpc = %settings.grpc_host, "created weaviate client");
        Ok(Self { http, base_url, grpc_host: settings.grpc_host.clone() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn grpc_host(&self) -> &str {
        &self.grpc_host
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// `host[:port]` gets the configured scheme; a full URL is used as given.
fn base_url(settings: &ConnectionSettings) -> Result<String> {
    let host = settings.http_host.trim().trim_end_matches('/');
    let candidate = if host.contains("://") { host.to_string() } else { format!("{}://{}", settings.scheme, host) };
    let url = Url::parse(&candidate).map_err(|e| Error::Connection(format!("invalid endpoint {candidate:?}: {e}")))?;
    if url.host_str().is_none() {
        return Err(Error::Connection(format!("endpoint {candidate:?} has no host")));
    }
    Ok(candidate)
}

/// Status line plus body, for error messages.
pub(crate) async fn describe_failure(resp: Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    format!("HTTP {status}: {}", body.trim())
}

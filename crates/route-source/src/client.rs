//! HTTP client for the hosted route database.

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use route_model::RouteRecord;

use crate::config::SourceConfig;
use crate::error::{Result, SourceError};

/// Client for the route database's REST surface.
///
/// One synchronous request per run. A failure here is fatal: nothing
/// downstream ever sees a partial record list.
#[derive(Debug, Clone)]
pub struct RouteClient {
    client: Client,
    config: SourceConfig,
}

impl RouteClient {
    /// Create a client with the service headers installed. The credential
    /// headers are marked sensitive so they stay out of debug output.
    pub fn new(config: SourceConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| SourceError::Config("api key contains invalid header bytes".to_string()))?;
        key.set_sensitive(true);
        headers.insert("apikey", key);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| SourceError::Config("api key contains invalid header bytes".to_string()))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SourceError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Fetch the complete ordered list of route records for this run.
    pub fn fetch_all(&self) -> Result<Vec<RouteRecord>> {
        let url = self.config.routes_url();
        tracing::debug!("fetching routes from {url}");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let records: Vec<RouteRecord> = response
            .json()
            .map_err(|e| SourceError::Decode(e.to_string()))?;
        tracing::info!(count = records.len(), "fetched route records");
        Ok(records)
    }
}

//! Connection settings for the hosted route database.

use std::env;

use route_model::ROUTES_TABLE;

use crate::error::{Result, SourceError};

/// Environment variable naming the service endpoint.
pub const ENDPOINT_VAR: &str = "SUPABASE_URL";
/// Environment variable naming the access credential.
pub const API_KEY_VAR: &str = "SUPABASE_KEY";
/// Fallback credential variable accepted when the service key is unset.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Endpoint and credential for one run.
///
/// Loaded before the audit starts; absence of either value is a fatal
/// configuration error and the fetch never happens.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl SourceConfig {
    /// Build a config from explicit values, trimming any trailing slash so
    /// joined paths stay canonical.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Load the endpoint and credential from the environment.
    pub fn from_env() -> Result<Self> {
        let endpoint = env::var(ENDPOINT_VAR)
            .map_err(|_| SourceError::Config(format!("{ENDPOINT_VAR} is not set")))?;
        let api_key = env::var(API_KEY_VAR)
            .or_else(|_| env::var(ANON_KEY_VAR))
            .map_err(|_| {
                SourceError::Config(format!("{API_KEY_VAR} or {ANON_KEY_VAR} must be set"))
            })?;
        Ok(Self::new(endpoint, api_key))
    }

    /// REST endpoint returning every route row.
    pub fn routes_url(&self) -> String {
        format!("{}/rest/v1/{ROUTES_TABLE}?select=*", self.endpoint)
    }
}

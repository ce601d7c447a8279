//! Record source for route audits: environment configuration and the one
//! bulk fetch against the hosted route database's REST surface.

mod client;
mod config;
mod error;

pub use client::RouteClient;
pub use config::{ANON_KEY_VAR, API_KEY_VAR, ENDPOINT_VAR, SourceConfig};
pub use error::{Result, SourceError};

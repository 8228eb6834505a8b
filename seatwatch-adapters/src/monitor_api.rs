//! Monitor service adapter using the `/monitor` HTTP endpoint.
//!
//! The monitoring server exposes every registered machine on
//! `GET /monitor`, guarded by HTTP Basic authentication. It typically
//! listens on port 5283.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seatwatch_adapters::monitor_api::MonitorApiAdapter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = MonitorApiAdapter::builder()
//!         .endpoint("http://localhost:5283")
//!         .credentials("admin", "admin")
//!         .build()?;
//!
//!     let inventory = adapter.fetch().await?;
//!
//!     for entry in inventory.iter() {
//!         println!("{}: {} ({})", entry.id, entry.record.hostname, entry.record.ip);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use seatwatch_types::MonitorInventory;

use crate::{parse_monitor_body, AdapterError};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter for reading the seat inventory from the monitor service.
#[derive(Debug, Clone)]
pub struct MonitorApiAdapter {
    client: Client,
    endpoint: String,
    username: String,
    password: String,
    timeout: Duration,
}

impl MonitorApiAdapter {
    /// Create a new builder for configuring the adapter.
    pub fn builder() -> MonitorApiAdapterBuilder {
        MonitorApiAdapterBuilder::default()
    }

    /// Full URL of the monitor listing.
    pub fn url(&self) -> String {
        format!("{}/monitor", self.endpoint)
    }

    /// Request timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch and parse the current inventory.
    ///
    /// Non-success statuses are reported before the body is looked at, so an
    /// HTML error page never reaches the JSON parser.
    pub async fn fetch(&self) -> Result<MonitorInventory, AdapterError> {
        let url = self.url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AdapterError::Auth("Invalid credentials".to_string()));
        }

        if !response.status().is_success() {
            return Err(AdapterError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), url);

        parse_monitor_body(&body)
    }
}

/// Builder for MonitorApiAdapter.
#[derive(Debug, Default)]
pub struct MonitorApiAdapterBuilder {
    endpoint: Option<String>,
    username: Option<String>,
    password: Option<String>,
    timeout: Option<Duration>,
}

impl MonitorApiAdapterBuilder {
    /// Set the service endpoint (e.g., "http://localhost:5283").
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the username and password for authentication.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the adapter.
    pub fn build(self) -> Result<MonitorApiAdapter, AdapterError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdapterError::Http(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| "http://localhost:5283".to_string());

        Ok(MonitorApiAdapter {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            username: self.username.unwrap_or_else(|| "admin".to_string()),
            password: self.password.unwrap_or_else(|| "admin".to_string()),
            timeout,
        })
    }
}

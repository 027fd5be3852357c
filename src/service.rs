//! The client for the remote transactions service.
//!
//! The dashboard only depends on [DashboardSource], so the HTTP client can be
//! swapped for a fake in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    Error,
    dashboard::{RawBalance, RawTransaction},
};

/// The path, relative to the service base URL, that lists transactions.
const TRANSACTIONS_PATH: &str = "transactions";

/// The body of the transactions service's `GET /transactions` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// All transactions, in the order the service returned them.
    pub transactions: Vec<RawTransaction>,
    /// The aggregate balance across all transactions.
    pub balance: RawBalance,
}

/// Supplies the raw data the dashboard displays.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Retrieve the transactions and balance in a single attempt.
    ///
    /// # Errors
    /// Returns [Error::ServiceRequest] if the data could not be retrieved and
    /// [Error::InvalidResponse] if it could not be decoded.
    async fn fetch_dashboard_data(&self) -> Result<DashboardResponse, Error>;
}

/// Fetches dashboard data from the transactions service over HTTP.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http_client: reqwest::Client,
    transactions_url: Url,
}

impl ServiceClient {
    /// Create a client that sends its requests with `http_client` to the
    /// service at `base_url`, e.g. "http://localhost:3333".
    ///
    /// A path in `base_url` is kept, so "http://example.com/api" fetches from
    /// "http://example.com/api/transactions".
    ///
    /// # Errors
    /// Returns [Error::InvalidServiceUrl] if `base_url` is not an absolute
    /// URL that can have a path appended to it.
    pub fn new(http_client: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        let invalid_url = || Error::InvalidServiceUrl(base_url.to_owned());

        let mut base = Url::parse(base_url)
            .inspect_err(|error| tracing::error!("could not parse service URL {base_url}: {error}"))
            .map_err(|_| invalid_url())?;

        if base.cannot_be_a_base() {
            tracing::error!("service URL {base_url} cannot be used as a base URL");
            return Err(invalid_url());
        }

        // Without the trailing slash, `join` would replace the last path segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let transactions_url = base.join(TRANSACTIONS_PATH).map_err(|_| invalid_url())?;

        Ok(Self {
            http_client,
            transactions_url,
        })
    }

    /// The URL transactions are fetched from.
    pub fn transactions_url(&self) -> &Url {
        &self.transactions_url
    }
}

#[async_trait]
impl DashboardSource for ServiceClient {
    async fn fetch_dashboard_data(&self) -> Result<DashboardResponse, Error> {
        tracing::debug!("Fetching dashboard data from {}", self.transactions_url);

        let response = self
            .http_client
            .get(self.transactions_url.clone())
            .send()
            .await
            .inspect_err(|error| {
                tracing::error!("could not reach the transactions service: {error}")
            })?
            .error_for_status()
            .inspect_err(|error| {
                tracing::error!("the transactions service responded with an error: {error}")
            })?;

        response
            .json::<DashboardResponse>()
            .await
            .inspect_err(|error| {
                tracing::error!("could not decode the transactions service response: {error}")
            })
            .map_err(Error::from)
    }
}

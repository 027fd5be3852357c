//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::{
    Error,
    service::{DashboardSource, ServiceClient},
    timezone::resolve_local_offset,
};

/// The state of the server.
#[derive(Clone)]
pub struct AppState {
    /// Where the dashboard gets its transactions and balance from.
    pub source: Arc<dyn DashboardSource>,

    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that fetches from the transactions service at `service_url`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "America/Sao_Paulo".
    ///
    /// # Errors
    /// Returns [Error::InvalidServiceUrl] if `service_url` is not a usable base URL and
    /// [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(service_url: &str, local_timezone: &str) -> Result<Self, Error> {
        resolve_local_offset(local_timezone)?;
        let client = ServiceClient::new(reqwest::Client::new(), service_url)?;

        tracing::info!(
            "Fetching transactions from {} with dates shown in {local_timezone}",
            client.transactions_url()
        );

        Ok(Self::with_source(Arc::new(client), local_timezone))
    }

    /// Create a new [AppState] that fetches from `source`.
    pub fn with_source(source: Arc<dyn DashboardSource>, local_timezone: &str) -> Self {
        Self {
            source,
            local_timezone: local_timezone.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::AppState;

    #[test]
    fn accepts_valid_settings() {
        let state = AppState::new("http://localhost:3333", "America/Sao_Paulo").unwrap();

        assert_eq!(state.local_timezone, "America/Sao_Paulo");
    }

    #[test]
    fn rejects_invalid_service_url() {
        let result = AppState::new("localhost", "Etc/UTC");

        assert!(
            matches!(result, Err(Error::InvalidServiceUrl(_))),
            "want invalid service URL error"
        );
    }

    #[test]
    fn rejects_invalid_timezone() {
        let result = AppState::new("http://localhost:3333", "Mars/Olympus_Mons");

        assert!(
            matches!(result, Err(Error::InvalidTimezoneError(_))),
            "want invalid timezone error"
        );
    }
}

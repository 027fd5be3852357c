//! A personal finance dashboard served as HTML.
//!
//! The dashboard fetches the list of transactions and the aggregate balance
//! from a remote transactions service, formats them for display in Brazilian
//! Portuguese (Real amounts, day/month/year dates) and renders a summary of
//! income, outcome and total next to a table of transactions.
//!
//! This library provides the router, the dashboard pages and the client for
//! the transactions service. The `server` binary wires them together.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod currency;
mod dashboard;
mod endpoints;
mod error;
mod header;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod service;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use currency::format_currency;
pub use dashboard::{
    Category, DashboardController, DashboardSnapshot, DisplayBalance, DisplayTransaction,
    FetchStatus, MountedDashboard, RawBalance, RawTransaction, TransactionType, ViewState,
    normalize_balance, normalize_transaction,
};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use service::{DashboardResponse, DashboardSource, ServiceClient};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

//! Owns the dashboard's view state for the lifetime of one mounted view.
//!
//! Mounting starts exactly one fetch in the background. The fetch task is the
//! only writer of the view state and publishes the normalized transactions and
//! balance together in a single swap, so readers never see transactions from
//! one response next to the balance of another. Dropping the mounted handle
//! cancels the fetch, and a result that arrives after the handle is gone is
//! discarded instead of published.

use std::sync::Arc;

use time::UtcOffset;
use tokio::{sync::watch, task::JoinHandle};

use crate::{
    Error,
    dashboard::{
        balance::{DisplayBalance, normalize_balance},
        transaction::{DisplayTransaction, normalize_transaction},
    },
    service::{DashboardResponse, DashboardSource},
};

/// The display-ready data the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// The transactions in the order the service returned them.
    pub transactions: Vec<DisplayTransaction>,
    /// The balance, `None` until a fetch succeeds.
    pub balance: Option<DisplayBalance>,
}

impl ViewState {
    /// Normalize every transaction and the balance of `response`.
    pub fn from_response(response: DashboardResponse, local_offset: UtcOffset) -> Self {
        let balance = normalize_balance(response.balance);
        tracing::debug!("Formatted balance: {balance:?}");

        let transactions = response
            .transactions
            .into_iter()
            .map(|transaction| normalize_transaction(transaction, local_offset))
            .collect();

        Self {
            transactions,
            balance: Some(balance),
        }
    }
}

/// Where the single fetch of a mounted dashboard is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    /// Mounted, the fetch has not started yet.
    Idle,
    /// Waiting for the transactions service.
    Fetching,
    /// The view state holds the data from the service.
    Succeeded,
    /// The fetch failed, the view state is still empty.
    Failed(Error),
}

impl FetchStatus {
    /// Whether the fetch has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchStatus::Succeeded | FetchStatus::Failed(_))
    }
}

/// What a mounted dashboard currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    /// The fetch lifecycle.
    pub status: FetchStatus,
    /// The view state, replaced wholesale when the fetch succeeds.
    pub view: Arc<ViewState>,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            view: Arc::new(ViewState::default()),
        }
    }
}

/// Creates mounted dashboards that load their data from a [DashboardSource].
#[derive(Clone)]
pub struct DashboardController {
    source: Arc<dyn DashboardSource>,
    local_offset: UtcOffset,
}

impl DashboardController {
    /// Create a controller that fetches from `source` and shows dates at `local_offset`.
    pub fn new(source: Arc<dyn DashboardSource>, local_offset: UtcOffset) -> Self {
        Self {
            source,
            local_offset,
        }
    }

    /// Mount a dashboard view and start its one fetch in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&self) -> MountedDashboard {
        let (sender, receiver) = watch::channel(DashboardSnapshot::default());
        let source = self.source.clone();
        let local_offset = self.local_offset;

        let task = tokio::spawn(async move {
            load(source.as_ref(), local_offset, &sender).await;
        });

        MountedDashboard { receiver, task }
    }
}

/// A dashboard view that is mounted. Dropping it cancels any pending fetch.
pub struct MountedDashboard {
    receiver: watch::Receiver<DashboardSnapshot>,
    task: JoinHandle<()>,
}

impl MountedDashboard {
    /// The current state of the dashboard.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.receiver.borrow().clone()
    }

    /// Wait until the fetch has succeeded or failed.
    ///
    /// # Errors
    /// Returns [Error::DashboardUnavailable] if the fetch task stopped without
    /// settling, e.g. because it panicked.
    pub async fn settled(&mut self) -> Result<DashboardSnapshot, Error> {
        self.receiver
            .wait_for(|snapshot| snapshot.status.is_settled())
            .await
            .map(|snapshot| snapshot.clone())
            .map_err(|_| {
                tracing::error!("the dashboard fetch task stopped before the fetch settled");
                Error::DashboardUnavailable
            })
    }
}

impl Drop for MountedDashboard {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Fetch from `source` once and publish the result to `sender`.
///
/// Nothing is published after the fetch if every receiver has been dropped.
async fn load(
    source: &dyn DashboardSource,
    local_offset: UtcOffset,
    sender: &watch::Sender<DashboardSnapshot>,
) {
    sender.send_modify(|snapshot| snapshot.status = FetchStatus::Fetching);

    let result = source.fetch_dashboard_data().await;

    if sender.is_closed() {
        tracing::debug!("Dashboard was unmounted before the fetch settled, discarding the result.");
        return;
    }

    match result {
        Ok(response) => {
            let view = ViewState::from_response(response, local_offset);
            tracing::info!(
                "Loaded {} transactions for the dashboard",
                view.transactions.len()
            );

            sender.send_replace(DashboardSnapshot {
                status: FetchStatus::Succeeded,
                view: Arc::new(view),
            });
        }
        Err(error) => {
            tracing::error!("Could not load the dashboard data: {error}");
            sender.send_modify(|snapshot| snapshot.status = FetchStatus::Failed(error));
        }
    }
}

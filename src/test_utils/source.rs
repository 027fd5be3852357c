//! Fake transactions services for exercising the dashboard without a network.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use time::macros::datetime;
use tokio::sync::oneshot;

use crate::{
    Error,
    dashboard::{Category, RawBalance, RawTransaction, TransactionType},
    service::{DashboardResponse, DashboardSource},
};

pub(crate) fn raw_transaction(id: &str, kind: TransactionType, value: f64) -> RawTransaction {
    RawTransaction {
        id: id.to_owned(),
        title: format!("Transaction {id}"),
        value,
        kind,
        category: Category {
            title: "Other".to_owned(),
        },
        created_at: datetime!(2024-01-05 12:00:00 UTC),
    }
}

/// A salary and a grocery bill, with the matching balance.
pub(crate) fn dashboard_response() -> DashboardResponse {
    DashboardResponse {
        transactions: vec![
            RawTransaction {
                id: "1".to_owned(),
                title: "Salary".to_owned(),
                value: 5000.0,
                kind: TransactionType::Income,
                category: Category {
                    title: "Job".to_owned(),
                },
                created_at: datetime!(2024-01-05 00:00:00 UTC),
            },
            RawTransaction {
                id: "2".to_owned(),
                title: "Groceries".to_owned(),
                value: 120.5,
                kind: TransactionType::Outcome,
                category: Category {
                    title: "Food".to_owned(),
                },
                created_at: datetime!(2024-01-06 15:30:00 UTC),
            },
        ],
        balance: RawBalance {
            income: 5000.0,
            outcome: 120.5,
            total: 4879.5,
        },
    }
}

/// Always returns the same response and counts how often it was asked.
pub(crate) struct CountingSource {
    response: DashboardResponse,
    calls: AtomicUsize,
}

impl CountingSource {
    pub(crate) fn new(response: DashboardResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardSource for CountingSource {
    async fn fetch_dashboard_data(&self) -> Result<DashboardResponse, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Always fails with the wrapped error.
pub(crate) struct FailingSource(pub Error);

#[async_trait]
impl DashboardSource for FailingSource {
    async fn fetch_dashboard_data(&self) -> Result<DashboardResponse, Error> {
        Err(self.0.clone())
    }
}

/// Never responds. Optionally signals when a pending fetch is dropped.
#[derive(Default)]
pub(crate) struct PendingSource {
    on_cancel: Mutex<Option<oneshot::Sender<()>>>,
}

impl PendingSource {
    /// Create a source whose receiver resolves once the pending fetch is dropped.
    pub(crate) fn with_cancel_signal() -> (Self, oneshot::Receiver<()>) {
        let (sender, receiver) = oneshot::channel();

        let source = Self {
            on_cancel: Mutex::new(Some(sender)),
        };

        (source, receiver)
    }
}

struct CancelGuard(Option<oneshot::Sender<()>>);

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if let Some(sender) = self.0.take() {
            let _ = sender.send(());
        }
    }
}

#[async_trait]
impl DashboardSource for PendingSource {
    async fn fetch_dashboard_data(&self) -> Result<DashboardResponse, Error> {
        let _guard = CancelGuard(self.on_cancel.lock().unwrap().take());

        std::future::pending().await
    }
}

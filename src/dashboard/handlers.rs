//! Route handlers for the dashboard page and its htmx-loaded content.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    dashboard::{
        controller::{DashboardController, FetchStatus, ViewState},
        view::{dashboard_content, dashboard_view},
    },
    service::DashboardSource,
    timezone::resolve_local_offset,
};

/// The state needed for displaying the dashboard.
#[derive(Clone)]
pub struct DashboardState {
    /// Where the transactions and balance come from.
    pub source: Arc<dyn DashboardSource>,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            source: state.source.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the dashboard page with empty summary cards and table.
///
/// The page requests [get_dashboard_content] once it has loaded.
pub async fn get_dashboard_page() -> Response {
    dashboard_view(&ViewState::default()).into_response()
}

/// Mount a dashboard, wait for its fetch to settle and render the populated
/// summary cards and table.
///
/// Responds with an error alert if the transactions service could not be
/// reached or sent an invalid response.
pub async fn get_dashboard_content(State(state): State<DashboardState>) -> Response {
    let local_offset = match resolve_local_offset(&state.local_timezone) {
        Ok(offset) => offset,
        Err(error) => return error.into_alert_response(),
    };

    let controller = DashboardController::new(state.source, local_offset);
    let mut dashboard = controller.mount();

    let snapshot = match dashboard.settled().await {
        Ok(snapshot) => snapshot,
        Err(error) => return error.into_alert_response(),
    };

    match snapshot.status {
        FetchStatus::Failed(error) => error.into_alert_response(),
        _ => dashboard_content(&snapshot.view).into_response(),
    }
}

//! Application router configuration.

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::{get_dashboard_content, get_dashboard_page},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DASHBOARD_CONTENT, get(get_dashboard_content))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}


#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        AppState, Error, build_router, endpoints,
        test_utils::{CountingSource, FailingSource, dashboard_response},
    };

    fn server_with(state: AppState) -> TestServer {
        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn working_state() -> AppState {
        AppState::with_source(
            Arc::new(CountingSource::new(dashboard_response())),
            "Etc/UTC",
        )
    }

    #[tokio::test]
    async fn dashboard_page_is_served() {
        let server = server_with(working_state());

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert!(
            html.select(&Selector::parse("#dashboard-content").unwrap())
                .next()
                .is_some()
        );
    }

    #[tokio::test]
    async fn each_content_request_fetches_once() {
        let source = Arc::new(CountingSource::new(dashboard_response()));
        let server = server_with(AppState::with_source(source.clone(), "Etc/UTC"));

        server.get(endpoints::DASHBOARD_VIEW).await.assert_status_ok();
        assert_eq!(source.call_count(), 0);

        server
            .get(endpoints::DASHBOARD_CONTENT)
            .await
            .assert_status_ok();
        assert_eq!(source.call_count(), 1);

        server
            .get(endpoints::DASHBOARD_CONTENT)
            .await
            .assert_status_ok();
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn content_reports_unreachable_service() {
        let server = server_with(AppState::with_source(
            Arc::new(FailingSource(Error::ServiceRequest("timed out".to_owned()))),
            "Etc/UTC",
        ));

        let response = server.get(endpoints::DASHBOARD_CONTENT).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        assert!(response.text().contains("Could not load transactions"));
    }

    #[tokio::test]
    async fn internal_error_page_is_served() {
        let server = server_with(working_state());

        let response = server.get(endpoints::INTERNAL_ERROR_VIEW).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = server_with(working_state());

        let response = server.get("/transactions/new").await;

        response.assert_status_not_found();
    }
}

//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request to the transactions service could not be completed, either
    /// because of a transport failure or because the service responded with a
    /// non-success status code.
    #[error("request to the transactions service failed: {0}")]
    ServiceRequest(String),

    /// The transactions service responded with a body that does not match the
    /// expected `{ transactions, balance }` shape.
    #[error("the transactions service sent an invalid response: {0}")]
    InvalidResponse(String),

    /// The configured base URL of the transactions service could not be parsed
    /// or cannot be used as a base for the transactions path.
    #[error("invalid service URL \"{0}\"")]
    InvalidServiceUrl(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The dashboard fetch ended without producing a result, e.g. the fetch
    /// task was aborted or panicked.
    #[error("the dashboard data is unavailable")]
    DashboardUnavailable,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Error::InvalidResponse(value.to_string())
        } else {
            Error::ServiceRequest(value.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::ServiceRequest(_) | Error::InvalidResponse(_) => InternalServerError {
                description: "Transactions Unavailable",
                fix: "Could not load your transactions. Please try again later.",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            Error::ServiceRequest(_) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Could not load transactions".to_owned(),
                    details: "The transactions service could not be reached. \
                    Try refreshing the page in a moment."
                        .to_owned(),
                },
            ),
            Error::InvalidResponse(_) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Could not load transactions".to_owned(),
                    details: "The transactions service sent data that could not be read."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

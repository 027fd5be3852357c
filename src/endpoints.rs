//! The endpoint URIs served by the dashboard.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page, rendered with empty state.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The dashboard content fragment, rendered once the transactions have been fetched.
pub const DASHBOARD_CONTENT: &str = "/dashboard/content";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

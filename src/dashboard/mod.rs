//! Dashboard module
//!
//! Shows the income, outcome and total of the user's finances above a table
//! of their transactions. The data is fetched from the transactions service
//! once per mounted view and normalized for display before it is rendered.

mod balance;
mod controller;
mod handlers;
mod transaction;
mod view;

pub use balance::{DisplayBalance, RawBalance, normalize_balance};
pub use controller::{
    DashboardController, DashboardSnapshot, FetchStatus, MountedDashboard, ViewState,
};
pub use handlers::{get_dashboard_content, get_dashboard_page};
pub use transaction::{
    Category, DisplayTransaction, RawTransaction, TransactionType, normalize_transaction,
};

//! Transactions as sent by the transactions service and as displayed in the
//! dashboard table.

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

use crate::currency::format_currency;

/// The marker placed in front of the formatted value of an outcome.
const OUTCOME_SIGN: &str = "-";

/// Whether a transaction increases or decreases the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Outcome,
}

/// The category a transaction is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The display name of the category.
    pub title: String,
}

/// A transaction as returned by the transactions service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// The service's unique identifier for the transaction.
    pub id: String,
    /// A short description of the transaction.
    pub title: String,
    /// The non-negative amount of the transaction, its direction is given by `kind`.
    pub value: f64,
    /// Whether the transaction is an income or an outcome.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A transaction with its value and date formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayTransaction {
    /// The service's unique identifier for the transaction.
    pub id: String,
    /// A short description of the transaction.
    pub title: String,
    /// The unformatted amount of the transaction.
    pub value: f64,
    /// The amount formatted as currency, prefixed with "- " for outcomes.
    pub formatted_value: String,
    /// The date the transaction was recorded, formatted as dd/mm/yyyy.
    pub formatted_date: String,
    /// Whether the transaction is an income or an outcome.
    pub kind: TransactionType,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Format a transaction from the service for display.
///
/// The date is shown as the calendar date at `local_offset`.
pub fn normalize_transaction(raw: RawTransaction, local_offset: UtcOffset) -> DisplayTransaction {
    let formatted_value = match raw.kind {
        TransactionType::Income => format_currency(raw.value),
        TransactionType::Outcome => format!("{OUTCOME_SIGN} {}", format_currency(raw.value)),
    };

    DisplayTransaction {
        formatted_value,
        formatted_date: format_date(raw.created_at, local_offset),
        id: raw.id,
        title: raw.title,
        value: raw.value,
        kind: raw.kind,
        category: raw.category,
        created_at: raw.created_at,
    }
}

/// Format the calendar date of `date_time` at `local_offset` as dd/mm/yyyy.
fn format_date(date_time: OffsetDateTime, local_offset: UtcOffset) -> String {
    let date = date_time.to_offset(local_offset).date();

    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

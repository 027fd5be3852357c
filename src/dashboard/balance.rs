//! The aggregate balance computed by the transactions service.

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;

/// The totals across all transactions, as computed by the transactions service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBalance {
    /// The sum of all incomes.
    pub income: f64,
    /// The sum of all outcomes.
    pub outcome: f64,
    /// Income minus outcome.
    pub total: f64,
}

/// The balance with each amount formatted as currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBalance {
    /// The formatted sum of all incomes.
    pub income: String,
    /// The formatted sum of all outcomes.
    pub outcome: String,
    /// The formatted net total.
    pub total: String,
}

/// Format each amount of the balance as currency.
///
/// Unlike transactions, balance amounts are formatted as they are, a negative
/// total keeps its minus sign and the outcome gets no sign marker.
pub fn normalize_balance(raw: RawBalance) -> DisplayBalance {
    DisplayBalance {
        income: format_currency(raw.income),
        outcome: format_currency(raw.outcome),
        total: format_currency(raw.total),
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayBalance, RawBalance, normalize_balance};

    #[test]
    fn formats_each_amount() {
        let balance = normalize_balance(RawBalance {
            income: 5000.0,
            outcome: 0.0,
            total: 5000.0,
        });

        assert_eq!(
            balance,
            DisplayBalance {
                income: "R$\u{a0}5.000,00".to_owned(),
                outcome: "R$\u{a0}0,00".to_owned(),
                total: "R$\u{a0}5.000,00".to_owned(),
            }
        );
    }

    #[test]
    fn outcome_has_no_sign_marker() {
        let balance = normalize_balance(RawBalance {
            income: 0.0,
            outcome: 120.5,
            total: -120.5,
        });

        assert_eq!(balance.outcome, "R$\u{a0}120,50");
        assert_eq!(balance.total, "-R$\u{a0}120,50");
    }
}

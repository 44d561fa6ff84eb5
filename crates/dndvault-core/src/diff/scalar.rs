//! Scalar field differ (name, race, currencies).

use crate::diff::model::ChangeRow;
use crate::model::{Currencies, Currency};

/// Row for `label` when the two texts differ.
pub fn diff_scalar(label: &str, old: &str, new: &str) -> Option<ChangeRow> {
    if old == new {
        None
    } else {
        Some(ChangeRow::new(label, old, new))
    }
}

/// Currency amount as displayed; unset reads as `"0"`.
pub fn currency_text(amount: Option<i64>) -> String {
    amount.unwrap_or(0).to_string()
}

/// One row per coin type whose normalised amount changed, in `CP, EP, GP, PP, SP` order.
pub fn diff_currencies(baseline: &Currencies, candidate: &Currencies) -> Vec<ChangeRow> {
    Currency::ALL
        .iter()
        .filter_map(|&currency| {
            diff_scalar(
                currency.label(),
                &currency_text(baseline.amount(currency)),
                &currency_text(candidate.amount(currency)),
            )
        })
        .collect()
}

//! Join-key filtering over the shared ledger.

use std::sync::Arc;

use crate::domain::{JoinKey, Ledger, OrderRecord};

/// Rows of a shared ledger whose join column matched one value, in ledger order.
#[derive(Debug, Clone)]
pub struct OrderSubset {
    ledger: Arc<Ledger>,
    rows: Vec<usize>,
}

impl OrderSubset {
    /// Ledger row indices of the subset.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> + '_ {
        self.rows.iter().filter_map(move |&row| self.ledger.get(row))
    }

    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }
}

/// Selects every row whose `key` column equals `value`.
///
/// Never fails; no matches yields an empty subset.
pub fn select(ledger: &Arc<Ledger>, key: JoinKey, value: &str) -> OrderSubset {
    let rows = ledger
        .orders()
        .iter()
        .enumerate()
        .filter(|(_, order)| key.value(order) == value)
        .map(|(row, _)| row)
        .collect();
    OrderSubset {
        ledger: Arc::clone(ledger),
        rows,
    }
}

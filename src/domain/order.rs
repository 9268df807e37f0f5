use std::{fmt, sync::Arc};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One ledger row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub client_id: String,
    pub product_id: String,
    pub date: NaiveDate,
    pub quantity: u32,
    pub total_amount: f64,
}

impl OrderRecord {
    pub fn new(
        client_id: impl Into<String>,
        product_id: impl Into<String>,
        date: NaiveDate,
        quantity: u32,
        total_amount: f64,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            product_id: product_id.into(),
            date,
            quantity,
            total_amount,
        }
    }

    /// Calendar month of the order date, 1 through 12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// The full order collection for the reporting period.
///
/// Loaded once and shared read-only behind an [`Arc`]; entity subsets refer to
/// rows by index instead of copying them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    orders: Vec<OrderRecord>,
}

impl Ledger {
    pub fn new(orders: Vec<OrderRecord>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn get(&self, row: usize) -> Option<&OrderRecord> {
        self.orders.get(row)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Sum of `total_amount` over every row.
    pub fn grand_total(&self) -> f64 {
        self.orders.iter().map(|order| order.total_amount).sum()
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl FromIterator<OrderRecord> for Ledger {
    fn from_iter<I: IntoIterator<Item = OrderRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Ledger column used to join orders to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinKey {
    Client,
    Product,
}

impl JoinKey {
    /// The join column value of `order` for this key.
    pub fn value<'a>(&self, order: &'a OrderRecord) -> &'a str {
        match self {
            JoinKey::Client => &order.client_id,
            JoinKey::Product => &order.product_id,
        }
    }

    /// The other entity's column.
    pub fn counterpart(&self) -> JoinKey {
        match self {
            JoinKey::Client => JoinKey::Product,
            JoinKey::Product => JoinKey::Client,
        }
    }

    /// Header of the column in the order file.
    pub fn column_name(&self) -> &'static str {
        match self {
            JoinKey::Client => "Client ID",
            JoinKey::Product => "Product ID",
        }
    }
}

impl fmt::Display for JoinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JoinKey::Client => "client",
            JoinKey::Product => "product",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(client: &str, product: &str, total: f64) -> OrderRecord {
        OrderRecord::new(
            client,
            product,
            NaiveDate::from_ymd_opt(2022, 4, 18).unwrap(),
            2,
            total,
        )
    }

    #[test]
    fn join_key_reads_matching_column() {
        let row = order("NT001", "NPK012", 10.0);
        assert_eq!(JoinKey::Client.value(&row), "NT001");
        assert_eq!(JoinKey::Product.value(&row), "NPK012");
        assert_eq!(JoinKey::Client.counterpart(), JoinKey::Product);
        assert_eq!(JoinKey::Product.counterpart(), JoinKey::Client);
    }

    #[test]
    fn grand_total_sums_every_row() {
        let ledger: Ledger = vec![order("A", "P", 10.0), order("B", "P", 32.5)]
            .into_iter()
            .collect();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.grand_total(), 42.5);
        assert_eq!(ledger.get(1).map(|o| o.month()), Some(4));
    }

    #[test]
    fn empty_ledger_totals_zero() {
        let ledger = Ledger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.grand_total(), 0.0);
    }
}

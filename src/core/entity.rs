//! Aggregation shared by clients and products.
//!
//! Both kinds join the ledger on their own id column and rank the *other*
//! column, so one trait with provided methods covers both.

use std::sync::Arc;

use tracing::debug;

use crate::{
    domain::{JoinKey, Ledger, Metric, MonthlySeries, RankedEntry},
    errors::{ReportError, Result},
};

use super::{aggregate, ledger_access, OrderSubset};

pub const DEFAULT_COUNTERPART_TOP_N: usize = 5;

/// Orders attached to an entity plus their cached revenue total.
#[derive(Debug, Clone)]
pub struct Attachment {
    orders: OrderSubset,
    total: f64,
}

impl Attachment {
    pub fn new(orders: OrderSubset) -> Self {
        let total = aggregate::sum_total(orders.iter());
        Self { orders, total }
    }

    pub fn orders(&self) -> &OrderSubset {
        &self.orders
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// An entity whose id joins against one ledger column.
pub trait LedgerEntity {
    /// Ledger column holding this entity's id.
    const JOIN: JoinKey;

    type Details;

    fn id(&self) -> &str;

    fn attachment(&self) -> Option<&Attachment>;

    fn set_attachment(&mut self, attachment: Attachment);

    fn build_details(&self, total_revenue: f64) -> Self::Details;

    /// Selects this entity's rows from `ledger`, replacing any earlier subset.
    fn attach_orders(&mut self, ledger: &Arc<Ledger>) {
        let orders = ledger_access::select(ledger, Self::JOIN, self.id());
        debug!(kind = %Self::JOIN, id = self.id(), rows = orders.len(), "attached orders");
        self.set_attachment(Attachment::new(orders));
    }

    fn is_attached(&self) -> bool {
        self.attachment().is_some()
    }

    /// The attachment, or [`ReportError::OrdersNotAttached`] when
    /// [`attach_orders`](Self::attach_orders) has not run.
    fn attached(&self) -> Result<&Attachment> {
        self.attachment()
            .ok_or_else(|| ReportError::OrdersNotAttached {
                kind: Self::JOIN,
                id: self.id().to_string(),
            })
    }

    fn orders(&self) -> Result<&OrderSubset> {
        Ok(self.attached()?.orders())
    }

    /// Sum of `total_amount` over the attached rows; 0 when there are none.
    fn total_revenue(&self) -> Result<f64> {
        Ok(self.attached()?.total())
    }

    /// The `n` counterpart ids with the largest summed `metric`.
    fn top_n_counterpart(&self, n: usize, metric: Metric) -> Result<Vec<RankedEntry>> {
        let orders = self.orders()?;
        Ok(aggregate::rank_by(
            orders.iter(),
            Self::JOIN.counterpart(),
            metric,
            n,
        ))
    }

    fn monthly_series(&self) -> Result<MonthlySeries> {
        Ok(aggregate::monthly_totals(self.orders()?.iter()))
    }

    fn details(&self) -> Result<Self::Details> {
        let total = self.total_revenue()?;
        Ok(self.build_details(total))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Client, OrderRecord, Product};

    fn ledger() -> Arc<Ledger> {
        let day = |month| NaiveDate::from_ymd_opt(2022, month, 5).unwrap();
        Ledger::new(vec![
            OrderRecord::new("NT001", "NPK012", day(1), 10, 100.0),
            OrderRecord::new("NT001", "ORG001", day(3), 4, 50.0),
            OrderRecord::new("KH002", "NPK012", day(1), 20, 200.0),
            OrderRecord::new("NT001", "NPK012", day(3), 5, 25.0),
        ])
        .into_shared()
    }

    #[test]
    fn aggregation_before_attach_fails() {
        let client = Client::new("NT001", "Store", "0900", "Ninh Thuan");
        assert!(!client.is_attached());
        let err = client.total_revenue().expect_err("not attached");
        assert!(matches!(
            err,
            ReportError::OrdersNotAttached {
                kind: JoinKey::Client,
                ..
            }
        ));
        assert!(client.monthly_series().is_err());
        assert!(client.top_n_counterpart(5, Metric::Quantity).is_err());
        assert!(client.details().is_err());
    }

    #[test]
    fn client_totals_and_ranks_products() {
        let mut client = Client::new("NT001", "Store", "0900", "Ninh Thuan");
        client.attach_orders(&ledger());
        assert_eq!(client.total_revenue().unwrap(), 175.0);
        let top = client.top_n_counterpart(5, Metric::Quantity).unwrap();
        assert_eq!(
            top,
            vec![
                RankedEntry::new("NPK012", 15.0),
                RankedEntry::new("ORG001", 4.0)
            ]
        );
        let series = client.monthly_series().unwrap();
        assert_eq!(series.get(1), Some(100.0));
        assert_eq!(series.get(3), Some(75.0));
        assert_eq!(series.total(), client.total_revenue().unwrap());
    }

    #[test]
    fn product_ranks_clients() {
        let mut product = Product::new("NPK012", "NPK", "NPK 16-16-8", "25kg", "bag", 20.0);
        product.attach_orders(&ledger());
        assert_eq!(product.total_revenue().unwrap(), 325.0);
        let top = product.top_n_counterpart(1, Metric::Quantity).unwrap();
        assert_eq!(top, vec![RankedEntry::new("KH002", 20.0)]);
        let details = product.details().unwrap();
        assert_eq!(details.total_revenue, 325.0);
        assert_eq!(details.unit, "bag");
    }

    #[test]
    fn unmatched_entity_totals_zero() {
        let mut client = Client::new("XX999", "Nobody", "", "Nowhere");
        client.attach_orders(&ledger());
        assert_eq!(client.total_revenue().unwrap(), 0.0);
        assert!(client.top_n_counterpart(5, Metric::Quantity).unwrap().is_empty());
        assert_eq!(client.monthly_series().unwrap(), MonthlySeries::zeroed());
    }

    #[test]
    fn reattaching_replaces_previous_subset() {
        let mut client = Client::new("KH002", "Store", "", "Khanh Hoa");
        client.attach_orders(&ledger());
        let empty = Ledger::default().into_shared();
        client.attach_orders(&empty);
        assert_eq!(client.total_revenue().unwrap(), 0.0);
        assert!(client.orders().unwrap().is_empty());
    }
}

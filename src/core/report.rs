//! Ledger-wide rollups and rankings.

use tracing::debug;

use crate::{
    domain::{
        Client, JoinKey, Ledger, Metric, MonthlyComparison, MonthlySeries, Product, RankedEntry,
        Rollup, RollupKey, RollupKeys, TargetSeries,
    },
    errors::{ReportError, Result},
};

use super::{aggregate, LedgerEntity};

pub const DEFAULT_GLOBAL_TOP_N: usize = 10;

/// Stateless queries over the loaded ledger and entity collections.
///
/// Nothing is accumulated on the aggregator itself; every call starts from
/// zero, so calling a rollup twice returns the same totals.
#[derive(Debug, Clone, Copy)]
pub struct ReportAggregator<'a> {
    ledger: &'a Ledger,
    clients: &'a [Client],
    products: &'a [Product],
    keys: &'a RollupKeys,
}

impl<'a> ReportAggregator<'a> {
    pub fn new(
        ledger: &'a Ledger,
        clients: &'a [Client],
        products: &'a [Product],
        keys: &'a RollupKeys,
    ) -> Self {
        Self {
            ledger,
            clients,
            products,
            keys,
        }
    }

    /// Revenue over the entire ledger.
    pub fn grand_total(&self) -> f64 {
        self.ledger.grand_total()
    }

    /// Product revenue bucketed by category.
    pub fn category_rollup(&self) -> Result<Rollup> {
        rollup(
            self.products
                .iter()
                .map(|product| (product.category.as_str(), product)),
            &self.keys.categories,
        )
    }

    /// Client revenue bucketed by province.
    pub fn province_rollup(&self) -> Result<Rollup> {
        rollup(
            self.clients
                .iter()
                .map(|client| (client.province.as_str(), client)),
            &self.keys.provinces,
        )
    }

    pub fn ledger_monthly_series(&self) -> MonthlySeries {
        aggregate::monthly_totals(self.ledger.orders())
    }

    /// The `n` clients or products with the largest summed revenue.
    pub fn top_n_global(&self, n: usize, dimension: JoinKey) -> Vec<RankedEntry> {
        aggregate::rank_by(self.ledger.orders(), dimension, Metric::Revenue, n)
    }

    /// Clients whose revenue is at least `threshold`, in collection order.
    pub fn clients_above_threshold(&self, threshold: f64) -> Result<Vec<&'a Client>> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ReportError::InvalidThreshold(threshold));
        }
        let mut selected = Vec::new();
        for client in self.clients {
            if client.total_revenue()? >= threshold {
                selected.push(client);
            }
        }
        Ok(selected)
    }

    pub fn monthly_vs_target(&self, targets: &TargetSeries) -> MonthlyComparison {
        MonthlyComparison::new(self.ledger_monthly_series(), *targets)
    }
}

/// Adds each entity's cached total into the first bucket whose `matches`
/// equals the entity field exactly. Entities matching no bucket are skipped,
/// and no entity is counted twice.
fn rollup<'e, E>(
    entities: impl Iterator<Item = (&'e str, &'e E)>,
    keys: &[RollupKey],
) -> Result<Rollup>
where
    E: LedgerEntity + 'e,
{
    let mut rollup = Rollup::zeroed(keys);
    for (field, entity) in entities {
        let total = entity.total_revenue()?;
        match keys.iter().position(|key| key.matches == field) {
            Some(index) => rollup.add(index, total),
            None => debug!(kind = %E::JOIN, id = entity.id(), field, "outside rollup keys"),
        }
    }
    Ok(rollup)
}

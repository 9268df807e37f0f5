//! Group-and-sum helpers shared by the entity and report aggregators.

use std::collections::BTreeMap;

use crate::domain::{JoinKey, Metric, MonthlySeries, OrderRecord, RankedEntry};

pub fn sum_total<'a>(orders: impl IntoIterator<Item = &'a OrderRecord>) -> f64 {
    orders.into_iter().map(|order| order.total_amount).sum()
}

/// Sums `total_amount` per calendar month of the order date.
pub fn monthly_totals<'a>(orders: impl IntoIterator<Item = &'a OrderRecord>) -> MonthlySeries {
    MonthlySeries::from_totals(
        orders
            .into_iter()
            .map(|order| (order.month(), order.total_amount)),
    )
}

/// Groups `orders` by the `key` column, sums `metric`, and returns the `n`
/// largest groups in descending order.
///
/// Groups are formed in ascending key order and then stably sorted by value,
/// so equal values keep ascending key order.
pub fn rank_by<'a>(
    orders: impl IntoIterator<Item = &'a OrderRecord>,
    key: JoinKey,
    metric: Metric,
    n: usize,
) -> Vec<RankedEntry> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for order in orders {
        *groups.entry(key.value(order)).or_insert(0.0) += metric.value(order);
    }

    let mut ranked: Vec<RankedEntry> = groups
        .into_iter()
        .map(|(id, value)| RankedEntry::new(id, value))
        .collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn order(client: &str, product: &str, month: u32, quantity: u32, total: f64) -> OrderRecord {
        OrderRecord::new(
            client,
            product,
            NaiveDate::from_ymd_opt(2022, month, 10).unwrap(),
            quantity,
            total,
        )
    }

    #[test]
    fn rank_sums_groups_and_sorts_descending() {
        let orders = vec![
            order("C1", "P1", 1, 4, 40.0),
            order("C1", "P2", 1, 9, 90.0),
            order("C1", "P1", 2, 6, 60.0),
            order("C1", "P3", 3, 1, 10.0),
        ];
        let ranked = rank_by(&orders, JoinKey::Product, Metric::Quantity, 5);
        assert_eq!(
            ranked,
            vec![
                RankedEntry::new("P1", 10.0),
                RankedEntry::new("P2", 9.0),
                RankedEntry::new("P3", 1.0),
            ]
        );
    }

    #[test]
    fn rank_breaks_ties_by_ascending_key() {
        let orders = vec![
            order("C9", "P1", 1, 5, 50.0),
            order("C2", "P1", 1, 5, 50.0),
            order("C5", "P1", 1, 5, 50.0),
            order("C1", "P1", 1, 1, 80.0),
        ];
        let ranked = rank_by(&orders, JoinKey::Client, Metric::Quantity, 3);
        let keys: Vec<&str> = ranked.iter().map(|entry| entry.key.as_str()).collect();
        assert_eq!(keys, vec!["C2", "C5", "C9"]);

        let by_revenue = rank_by(&orders, JoinKey::Client, Metric::Revenue, 2);
        assert_eq!(by_revenue[0], RankedEntry::new("C1", 80.0));
        assert_eq!(by_revenue[1], RankedEntry::new("C2", 50.0));
    }

    #[test]
    fn rank_with_zero_limit_is_empty() {
        let orders = vec![order("C1", "P1", 1, 1, 1.0)];
        assert!(rank_by(&orders, JoinKey::Client, Metric::Revenue, 0).is_empty());
    }

    #[test]
    fn monthly_totals_fill_missing_months() {
        let orders = vec![order("C1", "P1", 1, 1, 100.0), order("C1", "P1", 3, 1, 50.0)];
        let series = monthly_totals(&orders);
        assert_eq!(series.get(1), Some(100.0));
        assert_eq!(series.get(2), Some(0.0));
        assert_eq!(series.get(3), Some(50.0));
        assert_eq!(series.total(), sum_total(&orders));
    }
}

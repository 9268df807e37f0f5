use serde::{Deserialize, Serialize};

use super::OrderRecord;

/// Order column summed when ranking groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Quantity,
    Revenue,
}

impl Metric {
    pub fn value(&self, order: &OrderRecord) -> f64 {
        match self {
            Metric::Quantity => f64::from(order.quantity),
            Metric::Revenue => order.total_amount,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Quantity => "Quantity",
            Metric::Revenue => "Total",
        }
    }
}

/// A grouped id and its summed metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub key: String,
    pub value: f64,
}

impl RankedEntry {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

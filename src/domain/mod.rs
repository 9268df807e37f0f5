//! Order ledger, entities, and the plain data shapes handed to presentation.

pub mod client;
pub mod order;
pub mod product;
pub mod ranking;
pub mod rollup;
pub mod series;

pub use client::{Client, ClientDetails};
pub use order::{JoinKey, Ledger, OrderRecord};
pub use product::{Product, ProductDetails};
pub use ranking::{Metric, RankedEntry};
pub use rollup::{Rollup, RollupEntry, RollupKey, RollupKeys};
pub use series::{
    month_label, MonthComparison, MonthlyComparison, MonthlySeries, TargetSeries, MONTHS_IN_YEAR,
};

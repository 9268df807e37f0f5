use serde::{Deserialize, Serialize};

use crate::errors::{ReportError, Result};

pub const MONTHS_IN_YEAR: usize = 12;

const MONTH_LABELS: [&str; MONTHS_IN_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short English label for a 1-based month, `"?"` when out of range.
pub fn month_label(month: u32) -> &'static str {
    month_index(month)
        .and_then(|idx| MONTH_LABELS.get(idx).copied())
        .unwrap_or("?")
}

fn month_index(month: u32) -> Option<usize> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    (idx < MONTHS_IN_YEAR).then_some(idx)
}

/// Summed amounts for months 1..=12. Months without orders hold 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    totals: [f64; MONTHS_IN_YEAR],
}

impl MonthlySeries {
    pub fn zeroed() -> Self {
        Self {
            totals: [0.0; MONTHS_IN_YEAR],
        }
    }

    /// Adds each `(month, amount)` pair into its bucket. Months outside 1..=12
    /// are ignored.
    pub fn from_totals(amounts: impl IntoIterator<Item = (u32, f64)>) -> Self {
        let mut series = Self::zeroed();
        for (month, amount) in amounts {
            if let Some(idx) = month_index(month) {
                series.totals[idx] += amount;
            }
        }
        series
    }

    pub fn get(&self, month: u32) -> Option<f64> {
        month_index(month).map(|idx| self.totals[idx])
    }

    /// `(month, amount)` pairs in month order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (1u32..).zip(self.totals.iter().copied())
    }

    pub fn values(&self) -> &[f64; MONTHS_IN_YEAR] {
        &self.totals
    }

    pub fn total(&self) -> f64 {
        self.totals.iter().sum()
    }
}

impl Default for MonthlySeries {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Twelve monthly revenue targets, positionally aligned to January..December.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSeries {
    targets: [f64; MONTHS_IN_YEAR],
}

impl TargetSeries {
    /// Fails with [`ReportError::TargetLength`] unless exactly twelve values are given.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let targets = <[f64; MONTHS_IN_YEAR]>::try_from(values).map_err(|_| {
            ReportError::TargetLength {
                expected: MONTHS_IN_YEAR,
                found: values.len(),
            }
        })?;
        Ok(Self { targets })
    }

    pub fn get(&self, month: u32) -> Option<f64> {
        month_index(month).map(|idx| self.targets[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (1u32..).zip(self.targets.iter().copied())
    }

    pub fn values(&self) -> &[f64; MONTHS_IN_YEAR] {
        &self.targets
    }
}

/// One month of actual revenue against its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthComparison {
    pub month: u32,
    pub actual: f64,
    pub target: f64,
}

impl MonthComparison {
    pub fn met(&self) -> bool {
        self.actual >= self.target
    }
}

/// Ledger-wide monthly revenue paired with the monthly targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyComparison {
    pub actual: MonthlySeries,
    pub target: TargetSeries,
}

impl MonthlyComparison {
    pub fn new(actual: MonthlySeries, target: TargetSeries) -> Self {
        Self { actual, target }
    }

    pub fn rows(&self) -> Vec<MonthComparison> {
        self.actual
            .iter()
            .zip(self.target.iter())
            .map(|((month, actual), (_, target))| MonthComparison {
                month,
                actual,
                target,
            })
            .collect()
    }

    /// Months whose actual revenue reached the target.
    pub fn months_meeting_target(&self) -> Vec<u32> {
        self.rows()
            .into_iter()
            .filter(MonthComparison::met)
            .map(|row| row.month)
            .collect()
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A predeclared rollup bucket.
///
/// `matches` is compared against the entity field exactly, case included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupKey {
    pub label: String,
    pub matches: String,
}

impl RollupKey {
    pub fn new(label: impl Into<String>, matches: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            matches: matches.into(),
        }
    }

    /// A bucket whose label is also the matched value.
    pub fn exact(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            matches: label.clone(),
            label,
        }
    }
}

/// Closed key sets for the category and province rollups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupKeys {
    pub categories: Vec<RollupKey>,
    pub provinces: Vec<RollupKey>,
}

impl Default for RollupKeys {
    fn default() -> Self {
        Self {
            categories: vec![
                RollupKey::exact("NPK"),
                // product files spell this category in lower case
                RollupKey::new("Foliar Fertilizer", "foliar fertilizer"),
                RollupKey::exact("Organic"),
            ],
            provinces: vec![RollupKey::exact("Ninh Thuan"), RollupKey::exact("Khanh Hoa")],
        }
    }
}

impl RollupKeys {
    /// Describes the first repeated label or matched value, if any.
    ///
    /// Each set must be free of repeats for a rollup to count every entity at
    /// most once and to carry each label once.
    pub fn find_duplicate(&self) -> Option<String> {
        [("categories", &self.categories), ("provinces", &self.provinces)]
            .into_iter()
            .find_map(|(set, keys)| duplicate_in(keys).map(|found| format!("{set}: {found}")))
    }
}

fn duplicate_in(keys: &[RollupKey]) -> Option<String> {
    let mut labels = HashSet::new();
    let mut values = HashSet::new();
    for key in keys {
        if !labels.insert(key.label.as_str()) {
            return Some(format!("label `{}` is declared twice", key.label));
        }
        if !values.insert(key.matches.as_str()) {
            return Some(format!("value `{}` feeds two labels", key.matches));
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupEntry {
    pub label: String,
    pub total: f64,
}

/// Fixed-key totals in the order the keys were declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollup {
    entries: Vec<RollupEntry>,
}

impl Rollup {
    pub fn zeroed(keys: &[RollupKey]) -> Self {
        Self {
            entries: keys
                .iter()
                .map(|key| RollupEntry {
                    label: key.label.clone(),
                    total: 0.0,
                })
                .collect(),
        }
    }

    pub(crate) fn add(&mut self, index: usize, amount: f64) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.total += amount;
        }
    }

    pub fn entries(&self) -> &[RollupEntry] {
        &self.entries
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.total)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_have_no_repeats() {
        assert_eq!(RollupKeys::default().find_duplicate(), None);
    }

    #[test]
    fn repeated_value_is_reported() {
        let keys = RollupKeys {
            categories: vec![RollupKey::exact("NPK"), RollupKey::new("Fert", "NPK")],
            provinces: Vec::new(),
        };
        let found = keys.find_duplicate().expect("NPK feeds two labels");
        assert!(found.starts_with("categories"));
        assert!(found.contains("`NPK`"));
    }

    #[test]
    fn repeated_label_is_reported() {
        let keys = RollupKeys {
            categories: Vec::new(),
            provinces: vec![RollupKey::exact("Ninh Thuan"), RollupKey::exact("Ninh Thuan")],
        };
        let found = keys.find_duplicate().expect("label repeated");
        assert!(found.starts_with("provinces"));
    }
}

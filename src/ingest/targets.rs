use std::{io::Read, path::Path};

use serde::Deserialize;

use crate::{domain::TargetSeries, errors::Result};

use super::{error_line, malformed, open, reader_builder, source_name};

#[derive(Debug, Deserialize)]
struct TargetRow {
    #[serde(rename = "Target")]
    target: f64,
}

pub fn read_targets(path: &Path) -> Result<TargetSeries> {
    read_targets_from_reader(open(path)?, &source_name(path))
}

/// Reads the `Target` column; row N is the target for month N.
pub fn read_targets_from_reader<R: Read>(reader: R, source_name: &str) -> Result<TargetSeries> {
    let mut csv = reader_builder().from_reader(reader);
    let mut values = Vec::new();
    for (index, row) in csv.deserialize::<TargetRow>().enumerate() {
        let row: TargetRow = row.map_err(|err| {
            let line = error_line(&err, index as u64 + 2);
            malformed(source_name, line, err.to_string())
        })?;
        values.push(row.target);
    }
    TargetSeries::from_values(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReportError;

    fn target_file(rows: usize) -> String {
        let mut data = String::from("Month,Target\n");
        for month in 1..=rows {
            data.push_str(&format!("{month},{}\n", month * 1000));
        }
        data
    }

    #[test]
    fn twelve_rows_align_to_months() {
        let targets = read_targets_from_reader(target_file(12).as_bytes(), "targets.csv").unwrap();
        assert_eq!(targets.get(1), Some(1000.0));
        assert_eq!(targets.get(12), Some(12000.0));
    }

    #[test]
    fn short_target_file_is_a_configuration_error() {
        let err = read_targets_from_reader(target_file(11).as_bytes(), "targets.csv").unwrap_err();
        assert!(matches!(
            err,
            ReportError::TargetLength {
                expected: 12,
                found: 11
            }
        ));
    }
}

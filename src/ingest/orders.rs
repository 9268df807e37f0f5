use std::{io::Read, path::Path};

use chrono::NaiveDate;
use csv::StringRecord;
use serde::Deserialize;
use tracing::debug;

use crate::{
    domain::{Ledger, OrderRecord},
    errors::Result,
};

use super::{error_line, malformed, open, reader_builder, source_name};

#[derive(Debug, Deserialize)]
struct OrderRow {
    #[serde(rename = "Client ID")]
    client_id: String,
    #[serde(rename = "Product ID")]
    product_id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Quantity")]
    quantity: u32,
    #[serde(rename = "Total")]
    total: f64,
}

pub fn read_orders(path: &Path, date_formats: &[String]) -> Result<Ledger> {
    let ledger = read_orders_from_reader(open(path)?, &source_name(path), date_formats)?;
    debug!(path = %path.display(), rows = ledger.len(), "order file read");
    Ok(ledger)
}

/// Parses the order ledger. Columns are addressed by header; extra columns are
/// ignored.
pub fn read_orders_from_reader<R: Read>(
    reader: R,
    source_name: &str,
    date_formats: &[String],
) -> Result<Ledger> {
    let mut csv = reader_builder().from_reader(reader);
    let headers = csv
        .headers()
        .map_err(|err| malformed(source_name, error_line(&err, 1), err.to_string()))?
        .clone();
    let mut orders = Vec::new();
    let mut record = StringRecord::new();
    let mut fallback_line = 1;
    loop {
        fallback_line += 1;
        let more = csv.read_record(&mut record).map_err(|err| {
            malformed(source_name, error_line(&err, fallback_line), err.to_string())
        })?;
        if !more {
            break;
        }
        // a quoted field may span lines, so take the record's own start line
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(fallback_line);
        let row: OrderRow = record
            .deserialize(Some(&headers))
            .map_err(|err| malformed(source_name, line, err.to_string()))?;
        if row.client_id.is_empty() || row.product_id.is_empty() {
            return Err(malformed(source_name, line, "missing client or product id"));
        }
        if !row.total.is_finite() || row.total < 0.0 {
            return Err(malformed(
                source_name,
                line,
                format!("total must be a non-negative number, got {}", row.total),
            ));
        }
        let date = parse_date(&row.date, date_formats).ok_or_else(|| {
            malformed(
                source_name,
                line,
                format!("unrecognized date `{}`", row.date),
            )
        })?;
        orders.push(OrderRecord::new(
            row.client_id,
            row.product_id,
            date,
            row.quantity,
            row.total,
        ));
    }
    Ok(Ledger::new(orders))
}

/// Tries each format in order and returns the first successful parse.
pub fn parse_date(raw: &str, formats: &[String]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw.trim(), format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::errors::ReportError;

    fn formats() -> Vec<String> {
        Config::default_date_formats()
    }

    #[test]
    fn reads_rows_by_header_and_ignores_extra_columns() {
        let data = "\
Order ID,Client ID,Product ID,Date,Quantity,Total
1,NT001,NPK012,2022-01-05,10,1500000
2, KH002 ,ORG001,03/15/2022,2,400000
";
        let ledger = read_orders_from_reader(data.as_bytes(), "orders.csv", &formats()).unwrap();
        assert_eq!(ledger.len(), 2);
        let second = ledger.get(1).unwrap();
        assert_eq!(second.client_id, "KH002");
        assert_eq!(second.month(), 3);
        assert_eq!(ledger.grand_total(), 1_900_000.0);
    }

    #[test]
    fn bad_date_reports_line() {
        let data = "\
Client ID,Product ID,Date,Quantity,Total
NT001,NPK012,2022-01-05,1,10
NT001,NPK012,yesterday,1,10
";
        let err = read_orders_from_reader(data.as_bytes(), "orders.csv", &formats())
            .expect_err("date rejected");
        match err {
            ReportError::MalformedRow {
                source_name, line, ..
            } => {
                assert_eq!(source_name, "orders.csv");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn line_numbers_account_for_multiline_fields() {
        let data = "\
Client ID,Product ID,Date,Quantity,Total,Note
NT001,NPK012,2022-01-05,1,10,\"delivered
in two trips\"
NT001,NPK012,yesterday,1,10,late
";
        let err = read_orders_from_reader(data.as_bytes(), "orders.csv", &formats())
            .expect_err("date rejected");
        assert!(matches!(err, ReportError::MalformedRow { line: 4, .. }));
    }

    #[test]
    fn negative_total_reports_record_line() {
        let data = "\
Client ID,Product ID,Date,Quantity,Total
\"NT
001\",NPK012,2022-01-05,1,10
NT001,NPK012,2022-01-06,1,-5
";
        let err = read_orders_from_reader(data.as_bytes(), "orders.csv", &formats())
            .expect_err("negative total rejected");
        assert!(matches!(err, ReportError::MalformedRow { line: 4, .. }));
    }

    #[test]
    fn non_numeric_quantity_is_rejected() {
        let data = "Client ID,Product ID,Date,Quantity,Total\nNT001,NPK012,2022-01-05,ten,10\n";
        let err = read_orders_from_reader(data.as_bytes(), "orders.csv", &formats()).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRow { .. }));
    }

    #[test]
    fn negative_total_is_rejected() {
        let data = "Client ID,Product ID,Date,Quantity,Total\nNT001,NPK012,2022-01-05,1,-10\n";
        assert!(read_orders_from_reader(data.as_bytes(), "orders.csv", &formats()).is_err());
    }

    #[test]
    fn parse_date_tries_formats_in_order() {
        let formats = formats();
        assert_eq!(
            parse_date("2022-07-09", &formats),
            NaiveDate::from_ymd_opt(2022, 7, 9)
        );
        assert_eq!(
            parse_date("07/09/2022", &formats),
            NaiveDate::from_ymd_opt(2022, 7, 9)
        );
        assert_eq!(
            parse_date("25/12/2022", &formats),
            NaiveDate::from_ymd_opt(2022, 12, 25)
        );
        assert_eq!(parse_date("", &formats), None);
    }
}

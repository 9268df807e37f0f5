//! Client and product files: positional columns after a header line.

use std::{io::Read, path::Path};

use csv::StringRecord;

use crate::{
    domain::{Client, Product},
    errors::Result,
};

use super::{error_line, malformed, open, reader_builder, source_name};

const CLIENT_FIELDS: usize = 6;
const PRODUCT_FIELDS: usize = 6;

pub fn read_clients(path: &Path) -> Result<Vec<Client>> {
    read_clients_from_reader(open(path)?, &source_name(path))
}

/// Columns: `client_id, store_name, owner, phone, email, province`.
pub fn read_clients_from_reader<R: Read>(reader: R, source_name: &str) -> Result<Vec<Client>> {
    read_positional(reader, source_name, CLIENT_FIELDS, |fields| {
        Ok(Client::new(fields[0], fields[1], fields[3], fields[5])
            .with_owner(fields[2])
            .with_email(fields[4]))
    })
}

pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    read_products_from_reader(open(path)?, &source_name(path))
}

/// Columns: `product_id, category, name, specification, unit, price`.
pub fn read_products_from_reader<R: Read>(reader: R, source_name: &str) -> Result<Vec<Product>> {
    read_positional(reader, source_name, PRODUCT_FIELDS, |fields| {
        let price: f64 = fields[5]
            .parse()
            .map_err(|_| format!("price `{}` is not a number", fields[5]))?;
        Ok(Product::new(
            fields[0], fields[1], fields[2], fields[3], fields[4], price,
        ))
    })
}

fn read_positional<R, T, F>(
    reader: R,
    source_name: &str,
    width: usize,
    mut build: F,
) -> Result<Vec<T>>
where
    R: Read,
    F: FnMut(&[&str]) -> std::result::Result<T, String>,
{
    let mut csv = reader_builder().flexible(true).from_reader(reader);
    let mut items = Vec::new();
    let mut record = StringRecord::new();
    let mut fallback_line = 1;
    loop {
        fallback_line += 1;
        let more = csv
            .read_record(&mut record)
            .map_err(|err| malformed(source_name, error_line(&err, fallback_line), err.to_string()))?;
        if !more {
            break;
        }
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(fallback_line);
        if record.len() != width {
            return Err(malformed(
                source_name,
                line,
                format!("expected {} fields, found {}", width, record.len()),
            ));
        }
        let fields: Vec<&str> = record.iter().collect();
        if fields[0].is_empty() {
            return Err(malformed(source_name, line, "missing id"));
        }
        let item = build(&fields).map_err(|reason| malformed(source_name, line, reason))?;
        items.push(item);
    }
    Ok(items)
}

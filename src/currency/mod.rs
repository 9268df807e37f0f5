//! Amount formatting for report output.

/// Decimal places shown for a currency code.
pub fn minor_units_for(code: &str) -> usize {
    match code.to_ascii_uppercase().as_str() {
        "VND" | "JPY" | "KRW" => 0,
        _ => 2,
    }
}

/// Formats `value` with `precision` decimals and comma thousands grouping.
pub fn format_number(value: f64, precision: usize) -> String {
    let body = format!("{:.*}", precision, value.abs());
    let (int_part, fraction) = match body.find('.') {
        Some(pos) => body.split_at(pos),
        None => (body.as_str(), ""),
    };
    let sign = if value < 0.0 && body.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    format!("{sign}{}{fraction}", group_digits(int_part, ','))
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().enumerate() {
        if count != 0 && (digits.len() - count) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// `1,234.50 NZD` style amount.
pub fn format_amount(amount: f64, code: &str) -> String {
    format!(
        "{} {}",
        format_number(amount, minor_units_for(code)),
        code.to_ascii_uppercase()
    )
}

/// Share of `part` in `whole` as a percentage; 0 when `whole` is 0.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

//! Display formatting for amounts, currencies, and identifiers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a monetary value with thousands separators and two decimals,
/// e.g. `1500.25` -> `"1,500.25"`.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{grouped}.{frac:02}", if negative { "-" } else { "" })
}

/// Display symbol for the currencies the bank trades in.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        other => other,
    }
}

/// Shorten a ledger UUID for table display: first 8 characters plus an
/// ellipsis. Short ids pass through unchanged.
pub fn short_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        return id.to_owned();
    }
    let head: String = id.chars().take(8).collect();
    format!("{head}...")
}

use super::*;

// =============================================================
// format_amount
// =============================================================

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(1500.25), "1,500.25");
    assert_eq!(format_amount(1_250_000.0), "1,250,000.00");
}

#[test]
fn format_amount_small_values_ungrouped() {
    assert_eq!(format_amount(0.0), "0.00");
    assert_eq!(format_amount(999.9), "999.90");
}

#[test]
fn format_amount_rounds_to_cents() {
    assert_eq!(format_amount(10.006), "10.01");
    assert_eq!(format_amount(10.004), "10.00");
}

#[test]
fn format_amount_negative() {
    assert_eq!(format_amount(-1234.5), "-1,234.50");
}

// =============================================================
// currency_symbol
// =============================================================

#[test]
fn currency_symbol_known_codes() {
    assert_eq!(currency_symbol("EUR"), "€");
    assert_eq!(currency_symbol("USD"), "$");
    assert_eq!(currency_symbol("GBP"), "£");
}

#[test]
fn currency_symbol_unknown_code_passes_through() {
    assert_eq!(currency_symbol("CHF"), "CHF");
}

// =============================================================
// short_id
// =============================================================

#[test]
fn short_id_truncates_uuids() {
    assert_eq!(short_id("9be2f4a1-3c55-4b1e-9f7e-0d6f25c3a111"), "9be2f4a1...");
}

#[test]
fn short_id_leaves_short_ids_alone() {
    assert_eq!(short_id("tx-1"), "tx-1");
    assert_eq!(short_id("12345678"), "12345678");
}

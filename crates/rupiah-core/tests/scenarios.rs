//! End-to-end flows that chain parsing, tax, formatting and terbilang.

use rupiah_core::{
    format_rupiah, parse_rupiah, ppn, terbilang, to_e164, Amount, Invoice, TaxMode,
};

#[test]
fn ecommerce_shelf_price_breakdown() {
    // Price displayed to the customer includes PPN
    let tax = ppn(555_000.0, true);

    assert_eq!(tax.base_price(), 500_000.0);
    assert_eq!(tax.tax(), 55_000.0);
    assert_eq!(tax.taxed_price(), 555_000.0);

    assert_eq!(format_rupiah(tax.base_price()), "Rp 500.000");
    assert_eq!(format_rupiah(tax.tax()), "Rp 55.000");
    assert_eq!(format_rupiah(tax.taxed_price()), "Rp 555.000");
    assert_eq!(
        terbilang(tax.taxed_price()),
        "Lima Ratus Lima Puluh Lima Ribu Rupiah"
    );
}

#[test]
fn invoice_with_two_items() {
    let mut invoice = Invoice::ppn(TaxMode::Exclusive);
    invoice.add_line("Product A", 100_000.0, 1).unwrap();
    invoice.add_line("Product B", 250_000.0, 1).unwrap();

    let summary = invoice.summary();
    assert_eq!(summary.subtotal, 350_000.0);
    assert_eq!(summary.tax, 38_500.0);
    assert_eq!(summary.subtotal + summary.tax, 388_500.0);

    assert_eq!(format_rupiah(summary.subtotal), "Rp 350.000");
    assert_eq!(format_rupiah(summary.tax), "Rp 38.500");
    assert_eq!(format_rupiah(summary.total), "Rp 388.500");
}

#[test]
fn customer_form_input() {
    let amount = parse_rupiah("Rp 1.500.000");
    let phone = to_e164("0812-3456-7890");

    assert_eq!(amount, Amount::Int(1_500_000));
    assert_eq!(phone, "+6281234567890");

    let tax = ppn(amount.as_f64(), false);
    assert_eq!(tax.taxed_price(), 1_665_000.0);
    assert_eq!(format_rupiah(tax.taxed_price()), "Rp 1.665.000");
    assert_eq!(
        terbilang(tax.taxed_price()),
        "Satu Juta Enam Ratus Enam Puluh Lima Ribu Rupiah"
    );
}

#[test]
fn invoice_summary_serializes_for_frontends() {
    let mut invoice = Invoice::ppn(TaxMode::Exclusive);
    invoice.add_line("Keyboard", 300_000.0, 1).unwrap();

    let json = serde_json::to_value(invoice.summary()).unwrap();
    assert_eq!(json["subtotal"], 300_000.0);
    assert_eq!(json["tax"], 33_000.0);
    assert_eq!(json["lines"][0]["name"], "Keyboard");
    assert_eq!(json["lines"][0]["tax"]["taxedPrice"], 333_000.0);
}

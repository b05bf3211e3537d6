//! End-to-end behavior of the cleaning pipeline.

mod common;

use chrono::NaiveDate;
use sales_model::{CleaningOptions, RawRecord, RawValue, RejectionReason};
use sales_transform::clean_batch;

use common::complete_raw;

#[test]
fn imputes_price_and_drops_unresolvable_lag() {
    let full = complete_raw(1, "C-1");
    let mut peer = complete_raw(2, "C-2");
    peer.product_price = RawValue::from("20");
    peer.total_price = RawValue::from("40");
    let mut missing_price = complete_raw(3, "C-3");
    missing_price.product_price = RawValue::Missing;
    missing_price.total_price = RawValue::Missing;
    missing_price.quantity_sold = RawValue::from("3");
    let mut missing_lag = complete_raw(4, "C-4");
    missing_lag.product_name = Some("Garden Hose".to_string());
    missing_lag.product_id = Some("P-200".to_string());
    missing_lag.delivery_period = RawValue::from(" ");

    let outcome = clean_batch(
        &[full, peer, missing_price, missing_lag],
        &CleaningOptions::default(),
    );

    let ids: Vec<i64> = outcome.accepted.iter().map(|r| r.order_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(outcome.rejected.is_empty());

    let first = &outcome.accepted[0];
    assert_eq!(first.product_price, 10.0);
    assert_eq!(first.total_price, 20.0);
    assert_eq!(first.delivery_date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

    let imputed = &outcome.accepted[2];
    assert!((imputed.product_price - 15.0).abs() < 1e-9);
    assert!((imputed.total_price - 45.0).abs() < 1e-9);

    assert_eq!(outcome.report.imputed_prices, 1);
    assert_eq!(outcome.report.recomputed_totals, 1);
    assert_eq!(outcome.report.dropped_missing_lag, vec![Some(4)]);
}

#[test]
fn lag_imputed_from_product_peers() {
    let mut a = complete_raw(1, "C-1");
    a.delivery_period = RawValue::from("3");
    let mut b = complete_raw(2, "C-2");
    b.delivery_period = RawValue::from("6");
    let mut c = complete_raw(3, "C-3");
    c.delivery_period = RawValue::from("not yet");

    let outcome = clean_batch(&[a, b, c], &CleaningOptions::default());

    let imputed = &outcome.accepted[2];
    assert_eq!(imputed.delivery_period, 4);
    assert_eq!(
        imputed.delivery_date,
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    );
    assert_eq!(outcome.report.imputed_delivery_periods, 1);
}

#[test]
fn customer_fields_fill_forward_first() {
    let emails = [None, Some("a@example.com"), None, Some("b@example.com")];
    let batch: Vec<RawRecord> = emails
        .iter()
        .enumerate()
        .map(|(idx, email)| {
            let mut record = complete_raw(idx as i64 + 1, "C-7");
            record.email = email.map(str::to_string);
            record
        })
        .rev()
        .collect();

    let outcome = clean_batch(&batch, &CleaningOptions::default());

    let filled: Vec<&str> = outcome.accepted.iter().map(|r| r.email.as_str()).collect();
    assert_eq!(
        filled,
        vec!["a@example.com", "a@example.com", "a@example.com", "b@example.com"]
    );
}

#[test]
fn product_fields_fill_within_product_id() {
    let mut named = complete_raw(1, "C-1");
    named.product_category = Some("Food & Snacks".to_string());
    let mut unnamed = complete_raw(2, "C-2");
    unnamed.product_category = None;
    unnamed.product_name = None;

    let outcome = clean_batch(&[unnamed, named], &CleaningOptions::default());

    assert_eq!(outcome.accepted.len(), 2);
    for record in &outcome.accepted {
        assert_eq!(record.product_name, "Desk Lamp");
        assert_eq!(record.product_category, "snacks");
    }
}

#[test]
fn payment_variants_collapse_to_one_label() {
    let batch: Vec<RawRecord> = ["COD", " cash ", "Cash"]
        .iter()
        .enumerate()
        .map(|(idx, method)| {
            let mut record = complete_raw(idx as i64 + 1, "C-1");
            record.payment_method = Some(method.to_string());
            record
        })
        .collect();

    let outcome = clean_batch(&batch, &CleaningOptions::default());

    assert_eq!(outcome.accepted.len(), 3);
    assert!(outcome.accepted.iter().all(|r| r.payment_method == "cash"));
}

#[test]
fn unmapped_category_passes_through() {
    let mut record = complete_raw(1, "C-1");
    record.product_category = Some("  Garden ".to_string());

    let outcome = clean_batch(&[record], &CleaningOptions::default());

    assert_eq!(outcome.accepted[0].product_category, "garden");
    assert_eq!(outcome.report.unmapped_labels.len(), 1);
}

#[test]
fn rejection_listing() {
    let mut no_email = complete_raw(2, "C-2");
    no_email.email = None;
    let mut no_customer = complete_raw(4, "C-4");
    no_customer.cust_id = None;
    no_customer.payment_method = None;
    let batch = vec![
        no_customer,
        complete_raw(1, "C-1"),
        no_email,
        complete_raw(1, "C-3"),
    ];

    let outcome = clean_batch(&batch, &CleaningOptions::default());

    let listing: Vec<String> = outcome
        .rejected
        .iter()
        .map(|r| {
            let order = r.order_id.map_or("-".to_string(), |id| id.to_string());
            let cust = r.cust_id.clone().unwrap_or_else(|| "-".to_string());
            let missing = if r.missing_fields.is_empty() {
                "-".to_string()
            } else {
                r.missing_fields_label()
            };
            format!("{order} {cust} {} {missing}", r.reason)
        })
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    2 C-2 MISSING_REQUIRED_FIELD email
    4 - MISSING_REQUIRED_FIELD cust_id;payment_method
    1 C-3 DUPLICATE_ORDER_ID -
    ");
    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].cust_id, "C-1");
    assert_eq!(outcome.report.rejected_missing, 2);
    assert_eq!(outcome.report.rejected_duplicates, 1);
}

#[test]
fn absent_order_id_is_rejected_not_dropped() {
    let mut record = complete_raw(1, "C-1");
    record.order_id = None;

    let outcome = clean_batch(&[record], &CleaningOptions::default());

    assert!(outcome.accepted.is_empty());
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].reason, RejectionReason::MissingRequiredField);
    assert_eq!(outcome.rejected[0].order_id, None);
}

#[test]
fn coercion_failures_are_counted() {
    let mut record = complete_raw(1, "C-1");
    record.total_price = RawValue::from("N/A");
    record.quantity_sold = RawValue::from("two");

    let outcome = clean_batch(&[record], &CleaningOptions::default());

    // Total stays absent: quantity is unusable too.
    assert_eq!(outcome.report.total_coercion_failures(), 2);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].missing_fields_label(), "quantity_sold;total_price");
}

#[test]
fn three_record_batch() {
    // Both priced peers share the product of the unpriced record, so with only
    // three records it has a single peer at $10. The $10/$20 mean is covered
    // by imputes_price_and_drops_unresolvable_lag.
    let full = complete_raw(1, "C-1");
    let mut missing_price = complete_raw(2, "C-2");
    missing_price.product_price = RawValue::Missing;
    missing_price.total_price = RawValue::Missing;
    let mut missing_lag = complete_raw(3, "C-3");
    missing_lag.product_name = Some("Garden Hose".to_string());
    missing_lag.product_id = Some("P-200".to_string());
    missing_lag.delivery_period = RawValue::Missing;

    let outcome = clean_batch(
        &[full, missing_price, missing_lag],
        &CleaningOptions::default(),
    );

    let rows: Vec<(i64, f64, f64)> = outcome
        .accepted
        .iter()
        .map(|r| (r.order_id, r.product_price, r.total_price))
        .collect();
    assert_eq!(rows, vec![(1, 10.0, 20.0), (2, 10.0, 20.0)]);
    assert!(outcome.rejected.is_empty());
    assert_eq!(outcome.report.dropped_missing_lag, vec![Some(3)]);
}

#[test]
fn blank_text_is_a_missing_field() {
    let mut blank_name = complete_raw(1, "C-1");
    blank_name.cust_id = Some("   ".to_string());
    blank_name.first_name = Some(String::new());
    let mut other = complete_raw(2, "C-2");
    other.cust_id = Some("   ".to_string());
    other.first_name = Some("Grace".to_string());

    let outcome = clean_batch(&[blank_name, other], &CleaningOptions::default());

    assert!(outcome.accepted.is_empty());
    let missing: Vec<(Option<i64>, String)> = outcome
        .rejected
        .iter()
        .map(|r| (r.order_id, r.missing_fields_label()))
        .collect();
    assert_eq!(
        missing,
        vec![
            (Some(1), "cust_id;first_name".to_string()),
            (Some(2), "cust_id".to_string()),
        ]
    );
    assert!(
        outcome
            .rejected
            .iter()
            .all(|r| r.reason == RejectionReason::MissingRequiredField)
    );
}

#[test]
fn overflowing_price_is_rejected() {
    let mut a = complete_raw(1, "C-1");
    a.product_price = RawValue::from("1e308");
    a.total_price = RawValue::from("1e308");
    a.quantity_sold = RawValue::from("1");
    let mut b = a.clone();
    b.order_id = Some(2);
    let mut unpriced = complete_raw(3, "C-3");
    unpriced.product_price = RawValue::Missing;
    unpriced.total_price = RawValue::Missing;

    let outcome = clean_batch(&[a, b, unpriced], &CleaningOptions::default());

    assert!(outcome.accepted.iter().all(|r| r.product_price.is_finite()));
    assert!(outcome.accepted.iter().all(|r| r.total_price.is_finite()));
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].order_id, Some(3));
    assert_eq!(outcome.rejected[0].missing_fields_label(), "total_price");
}

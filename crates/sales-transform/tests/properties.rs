//! Batch-level properties of the cleaning pipeline.

use proptest::prelude::*;
use sales_model::{CleaningOptions, RawRecord, RawValue};
use sales_transform::clean_batch;

const CUSTOMERS: &[&str] = &["C-1", "C-2", "C-3", "   "];
const NAMES: &[&str] = &["Ada", "Grace", "Edsger", ""];
const GENDERS: &[&str] = &["Female", "Male"];
const EMAILS: &[&str] = &["a@example.com", "g@example.com"];
const PRODUCT_IDS: &[&str] = &["P-1", "P-2"];
const PRODUCTS: &[&str] = &["Desk Lamp", "Garden Hose", "Kettle"];
const CATEGORIES: &[&str] = &["Electrnics", "food & snacks", "Clothing ", "Garden"];
const PAYMENTS: &[&str] = &["COD", " cash ", "credit_card", "PayPal", "barter"];
const ADDRESSES: &[&str] = &["1 Main St", "2 Side Rd"];
const PRICES: &[&str] = &["5", "12.5", "20", "n/a"];
const QUANTITIES: &[&str] = &["1", "3", "2.5"];
const DATES: &[&str] = &["2024-01-31", "02/29/2024", "yesterday"];
const LAGS: &[&str] = &["0", "2", "7", "3.6", "-1"];

fn text(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(values).prop_map(str::to_string))
}

fn cell(values: &'static [&'static str]) -> impl Strategy<Value = RawValue> {
    prop_oneof![
        1 => Just(RawValue::Missing),
        4 => prop::sample::select(values).prop_map(RawValue::from),
    ]
}

fn raw_record() -> impl Strategy<Value = RawRecord> {
    (
        (
            prop::option::of(1i64..12),
            text(CUSTOMERS),
            text(NAMES),
            text(GENDERS),
            text(EMAILS),
        ),
        (text(PRODUCT_IDS), text(PRODUCTS), text(CATEGORIES)),
        (
            cell(PRICES),
            cell(QUANTITIES),
            cell(DATES),
            cell(LAGS),
            cell(PRICES),
        ),
        (text(PAYMENTS), text(ADDRESSES)),
    )
        .prop_map(
            |(
                (order_id, cust_id, first_name, gender, email),
                (product_id, product_name, product_category),
                (product_price, quantity_sold, purchase_date, delivery_period, total_price),
                (payment_method, shipping_address),
            )| RawRecord {
                order_id,
                cust_id,
                last_name: first_name.as_ref().map(|_| "Doe".to_string()),
                first_name,
                gender,
                email,
                product_id,
                product_name,
                product_category,
                product_price,
                quantity_sold,
                purchase_date,
                delivery_period,
                payment_method,
                shipping_address,
                total_price,
            },
        )
}

fn batch() -> impl Strategy<Value = Vec<RawRecord>> {
    prop::collection::vec(raw_record(), 0..24)
}

fn unique_batch() -> impl Strategy<Value = Vec<RawRecord>> {
    batch().prop_map(|mut records| {
        for (idx, record) in records.iter_mut().enumerate() {
            record.order_id = Some(idx as i64 + 1);
        }
        records
    })
}

proptest! {
    #[test]
    fn accepted_order_ids_are_unique(records in batch()) {
        let outcome = clean_batch(&records, &CleaningOptions::default());
        let mut ids: Vec<i64> = outcome.accepted.iter().map(|r| r.order_id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn every_input_is_accounted_for(records in batch()) {
        let outcome = clean_batch(&records, &CleaningOptions::default());
        prop_assert_eq!(
            outcome.accepted.len()
                + outcome.rejected.len()
                + outcome.report.dropped_missing_lag.len(),
            records.len()
        );
        prop_assert_eq!(outcome.report.input_records, records.len());
    }

    #[test]
    fn input_order_does_not_matter(records in unique_batch()) {
        let options = CleaningOptions::default();
        let forward = clean_batch(&records, &options);
        let reversed: Vec<RawRecord> = records.iter().rev().cloned().collect();
        let backward = clean_batch(&reversed, &options);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn cleaning_is_idempotent(records in batch()) {
        let options = CleaningOptions::default();
        let first = clean_batch(&records, &options);
        let replay: Vec<RawRecord> = first.accepted.iter().map(RawRecord::from).collect();
        let second = clean_batch(&replay, &options);
        prop_assert!(second.rejected.is_empty());
        prop_assert_eq!(second.accepted, first.accepted);
    }

    #[test]
    fn admitted_records_are_complete(records in batch()) {
        let outcome = clean_batch(&records, &CleaningOptions::default());
        for record in &outcome.accepted {
            prop_assert!(record.delivery_period >= 0);
            prop_assert!(record.product_price.is_finite());
            prop_assert!(record.total_price.is_finite());
            prop_assert!(!record.payment_method.is_empty());
            prop_assert!(!record.cust_id.trim().is_empty());
            prop_assert!(!record.first_name.trim().is_empty());
            prop_assert_eq!(
                record.delivery_date,
                record.purchase_date + chrono::Days::new(record.delivery_period as u64)
            );
        }
    }
}

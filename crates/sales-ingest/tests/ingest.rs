//! Bronze ingestion against files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use sales_ingest::{BronzeStore, IngestError};
use sales_model::{RawValue, SalesField};
use tempfile::TempDir;

const SOURCE: &str = "\
Unnamed: 0,id,first_name,last_name,gender,email,product_id,product_name,product_category,product_price,quantity_sold,purchase_date,delivery_period,payment_method,shipping_address,total_price
0,C-1,Ada,Lovelace,Female,ada@example.com,P-1,Desk Lamp,Electronics,10,2,03/01/2024,4,credit_card,12 Analytical Way,20
1,C-2,Grace,Hopper,Female,grace@example.com,P-1,Desk Lamp,Electronics,n/a,1,03/02/2024, ,COD,7 Navy Rd,
2,C-3,Alan,Turing,Male,,P-2,Kettle,Food & Snacks,25,1,03/03/2024,2,PayPal,1 Bletchley Park,25
";

fn write_source(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, SOURCE).unwrap();
    path
}

#[test]
fn ingest_numbers_batches_sequentially() {
    let dir = TempDir::new().unwrap();
    let store = BronzeStore::open(dir.path().join("warehouse"));
    let source = write_source(dir.path(), "sales.csv");

    let first = store.ingest(&source).unwrap();
    assert_eq!(first.appended, 3);
    assert_eq!(first.order_ids, Some((1, 3)));
    assert_eq!(first.total_rows, 3);

    let second = store.ingest(&source).unwrap();
    assert_eq!(second.order_ids, Some((4, 6)));
    assert_eq!(second.total_rows, 6);

    let records = store.load().unwrap();
    let ids: Vec<Option<i64>> = records.iter().map(|r| r.order_id).collect();
    assert_eq!(ids, (1..=6).map(Some).collect::<Vec<_>>());
    assert_eq!(store.max_order_id().unwrap(), 6);
}

#[test]
fn ingest_keeps_raw_text() {
    let dir = TempDir::new().unwrap();
    let store = BronzeStore::open(dir.path());
    let source = write_source(dir.path(), "sales.csv");
    store.ingest(&source).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records[0].cust_id.as_deref(), Some("C-1"));
    assert_eq!(records[0].purchase_date, RawValue::Text("03/01/2024".into()));
    assert_eq!(records[1].product_price, RawValue::Text("n/a".into()));
    assert!(records[1].delivery_period.is_missing());
    assert!(records[1].total_price.is_missing());
    assert_eq!(records[1].payment_method.as_deref(), Some("COD"));
    assert_eq!(records[2].email, None);
}

#[test]
fn ingest_reports_diagnostics() {
    let dir = TempDir::new().unwrap();
    let store = BronzeStore::open(dir.path());
    let source = write_source(dir.path(), "sales.csv");

    let batch = store.ingest(&source).unwrap();
    let diagnostics = &batch.diagnostics;

    assert_eq!(diagnostics.rows, 3);
    assert!(diagnostics.duplicate_order_ids.is_empty());
    assert_eq!(diagnostics.blank_delivery_periods, 1);
    assert_eq!(diagnostics.missing.get(&SalesField::Email), Some(&1));
    assert_eq!(diagnostics.missing.get(&SalesField::TotalPrice), Some(&1));
    assert_eq!(diagnostics.non_numeric.get(&SalesField::ProductPrice), Some(&1));
}

#[test]
fn missing_source_aborts_before_writing() {
    let dir = TempDir::new().unwrap();
    let store = BronzeStore::open(dir.path().join("warehouse"));

    let result = store.ingest(&dir.path().join("absent.csv"));

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    assert!(!store.exists());
}

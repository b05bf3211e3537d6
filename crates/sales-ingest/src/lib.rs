//! Bronze stage of the sales pipeline.
//!
//! Raw purchase events arrive as CSV exports. This crate reads them with every
//! column as text, maps headers onto [`SalesField`](sales_model::SalesField)s,
//! assigns order ids that continue the bronze table's sequence, logs
//! data-quality diagnostics without repairing anything, and appends the batch
//! to the bronze table.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sales_ingest::BronzeStore;
//!
//! let store = BronzeStore::open("warehouse");
//! let batch = store.ingest(Path::new("data/sales_2024-03-01.csv"))?;
//! batch.diagnostics.log();
//! let bronze = store.load()?;
//! ```

mod csv;
mod diagnostics;
mod error;
mod records;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::read_sales_csv;

// === Frame Conversion ===
pub use records::{assign_order_ids, frame_to_records, records_to_frame, source_field};

// === Diagnostics ===
pub use diagnostics::BronzeDiagnostics;

// === Bronze Table ===
pub use store::{BronzeBatch, BronzeStore};

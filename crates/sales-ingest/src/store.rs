//! Directory-backed bronze table.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::*;
use sales_model::RawRecord;
use tracing::{info, warn};

use crate::csv::read_sales_csv;
use crate::diagnostics::BronzeDiagnostics;
use crate::error::{IngestError, Result};
use crate::records::{assign_order_ids, frame_to_records, records_to_frame};

/// Outcome of appending one source file to the bronze table.
#[derive(Debug, Clone)]
pub struct BronzeBatch {
    pub source: PathBuf,
    /// Rows appended by this batch.
    pub appended: usize,
    /// First and last order id assigned, if any rows were appended.
    pub order_ids: Option<(i64, i64)>,
    /// Rows in the bronze table after the append.
    pub total_rows: usize,
    pub diagnostics: BronzeDiagnostics,
}

/// The bronze table: every ingested record, stored as text in
/// `bronze_sales.csv` under the warehouse directory.
#[derive(Debug, Clone)]
pub struct BronzeStore {
    root: PathBuf,
}

impl BronzeStore {
    pub const TABLE_FILE: &'static str = "bronze_sales.csv";

    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn table_path(&self) -> PathBuf {
        self.root.join(Self::TABLE_FILE)
    }

    pub fn exists(&self) -> bool {
        self.table_path().is_file()
    }

    /// Loads every bronze record; an absent table is empty.
    pub fn load(&self) -> Result<Vec<RawRecord>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        let df = read_sales_csv(&self.table_path())?;
        Ok(frame_to_records(&df))
    }

    /// Highest stored order id, or 0 for an empty table.
    pub fn max_order_id(&self) -> Result<i64> {
        Ok(self
            .load()?
            .iter()
            .filter_map(|record| record.order_id)
            .max()
            .unwrap_or(0))
    }

    /// Appends records and rewrites the table. Returns the new row count.
    pub fn append(&self, records: &[RawRecord]) -> Result<usize> {
        let mut all = self.load()?;
        all.extend_from_slice(records);
        self.write(&all)?;
        Ok(all.len())
    }

    fn write(&self, records: &[RawRecord]) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| IngestError::DirectoryCreate {
            path: self.root.clone(),
            source: e,
        })?;
        let path = self.table_path();
        let mut df = records_to_frame(records)?;
        let mut file = File::create(&path).map_err(|e| IngestError::FileWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .map_err(|e| IngestError::FileWrite {
                path: path.clone(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Reads a source export, numbers it after the stored maximum, and
    /// appends it.
    ///
    /// Diagnostics are computed on the numbered batch and returned, not
    /// acted on.
    pub fn ingest(&self, source: &Path) -> Result<BronzeBatch> {
        let df = read_sales_csv(source)?;
        let mut records = frame_to_records(&df);

        if records.is_empty() {
            warn!(source = %source.display(), "source file has no rows");
            let total_rows = self.load()?.len();
            return Ok(BronzeBatch {
                source: source.to_path_buf(),
                appended: 0,
                order_ids: None,
                total_rows,
                diagnostics: BronzeDiagnostics::default(),
            });
        }

        let current_max = self.max_order_id()?;
        let last = assign_order_ids(&mut records, current_max);
        let diagnostics = BronzeDiagnostics::inspect(&records);
        let total_rows = self.append(&records)?;
        info!(
            source = %source.display(),
            appended = records.len(),
            first_order_id = current_max + 1,
            last_order_id = last,
            total_rows,
            "appended batch to bronze table"
        );

        Ok(BronzeBatch {
            source: source.to_path_buf(),
            appended: records.len(),
            order_ids: Some((current_max + 1, last)),
            total_rows,
            diagnostics,
        })
    }
}

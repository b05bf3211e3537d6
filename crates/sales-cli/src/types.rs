use std::path::PathBuf;

use sales_ingest::BronzeBatch;
use sales_model::{CleaningReport, RejectedRecord};
use sales_report::{GoldTable, SilverPaths};

#[derive(Debug)]
pub struct BronzeResult {
    pub batches: Vec<BronzeBatch>,
    pub table: PathBuf,
}

#[derive(Debug)]
pub struct SilverResult {
    pub bronze_rows: usize,
    pub accepted: usize,
    pub rejected: Vec<RejectedRecord>,
    pub report: CleaningReport,
    pub paths: SilverPaths,
}

#[derive(Debug)]
pub struct GoldResult {
    pub tables: Vec<GoldTable>,
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct RunResult {
    pub bronze: Option<BronzeResult>,
    pub silver: SilverResult,
    pub gold: GoldResult,
}

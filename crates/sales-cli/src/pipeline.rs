//! Stage runners shared by the subcommands.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use sales_ingest::BronzeStore;
use sales_model::CleaningOptions;
use sales_report::{SilverTables, build_gold, write_gold};
use sales_transform::clean_batch;
use tracing::{debug, info, info_span};

use crate::logging::redact_value;
use crate::types::{BronzeResult, GoldResult, RunResult, SilverResult};

/// Cleaning options from `--config`, or the compiled-in defaults.
pub fn load_options(config: Option<&Path>) -> Result<CleaningOptions> {
    match config {
        Some(path) => CleaningOptions::from_json_file(path)
            .with_context(|| format!("load cleaning options from {}", path.display())),
        None => Ok(CleaningOptions::default()),
    }
}

/// Appends each source to the bronze table, in order.
///
/// A missing or unreadable source aborts the stage; sources before it stay
/// appended.
pub fn run_bronze(warehouse: &Path, sources: &[impl AsRef<Path>]) -> Result<BronzeResult> {
    let span = info_span!("bronze", warehouse = %warehouse.display());
    let _guard = span.enter();
    let store = BronzeStore::open(warehouse);
    let mut batches = Vec::with_capacity(sources.len());
    for source in sources {
        let source = source.as_ref();
        let batch = store
            .ingest(source)
            .with_context(|| format!("ingest {}", source.display()))?;
        batch.diagnostics.log();
        batches.push(batch);
    }
    Ok(BronzeResult {
        batches,
        table: store.table_path(),
    })
}

/// Rebuilds the silver tables from the full bronze table.
pub fn run_silver(warehouse: &Path, options: &CleaningOptions) -> Result<SilverResult> {
    let span = info_span!("silver", warehouse = %warehouse.display());
    let _guard = span.enter();
    let start = Instant::now();

    let store = BronzeStore::open(warehouse);
    let bronze = store.load().context("load bronze table")?;
    if bronze.is_empty() {
        info!("bronze table is empty");
    }

    let outcome = clean_batch(&bronze, options);
    for rejected in &outcome.rejected {
        debug!(
            order_id = ?rejected.order_id,
            cust_id = redact_value(rejected.cust_id.as_deref().unwrap_or("")),
            reason = %rejected.reason,
            missing = %rejected.missing_fields_label(),
            "rejected record"
        );
    }

    let paths = SilverTables::open(warehouse)
        .write(&outcome)
        .context("write silver tables")?;
    info!(
        bronze_rows = bronze.len(),
        accepted = outcome.accepted.len(),
        rejected = outcome.rejected.len(),
        duration_ms = start.elapsed().as_millis(),
        "silver stage complete"
    );

    Ok(SilverResult {
        bronze_rows: bronze.len(),
        accepted: outcome.accepted.len(),
        rejected: outcome.rejected,
        report: outcome.report,
        paths,
    })
}

/// Rebuilds the gold tables from the silver sales table.
pub fn run_gold(warehouse: &Path) -> Result<GoldResult> {
    let span = info_span!("gold", warehouse = %warehouse.display());
    let _guard = span.enter();
    let silver = SilverTables::open(warehouse)
        .load_sales()
        .context("load silver table")?;
    let tables = build_gold(&silver).context("aggregate gold tables")?;
    let written = write_gold(warehouse, &tables).context("write gold tables")?;
    Ok(GoldResult { tables, written })
}

/// Bronze (when sources are given), then silver, then gold.
pub fn run_all(
    warehouse: &Path,
    sources: &[impl AsRef<Path>],
    options: &CleaningOptions,
) -> Result<RunResult> {
    let bronze = if sources.is_empty() {
        None
    } else {
        Some(run_bronze(warehouse, sources)?)
    };
    let silver = run_silver(warehouse, options)?;
    let gold = run_gold(warehouse)?;
    Ok(RunResult {
        bronze,
        silver,
        gold,
    })
}

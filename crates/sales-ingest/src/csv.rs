//! Source CSV reading.

use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads a source export into a DataFrame with every column as text.
///
/// Typing is left to the cleaning stage, so nothing is inferred here: a price
/// column holding `"$12"` in one row must not fail the whole file.
pub fn read_sales_csv(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df
        .get_column_names()
        .iter()
        .all(|name| name.trim().is_empty())
    {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read source CSV"
    );
    Ok(df)
}

//! Silver output: accepted records, rejections and the cleaning report.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::*;
use sales_model::CleaningOutcome;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::frames::{clean_frame, rejections_frame};

/// Files written by one silver run.
#[derive(Debug, Clone)]
pub struct SilverPaths {
    pub sales: PathBuf,
    pub rejections: PathBuf,
    pub report: PathBuf,
}

/// Silver tables under the warehouse directory.
#[derive(Debug, Clone)]
pub struct SilverTables {
    root: PathBuf,
}

pub(crate) fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ReportError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| ReportError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ReportError::DirectoryCreate {
        path: path.to_path_buf(),
        source: e,
    })
}

impl SilverTables {
    pub const SALES_FILE: &'static str = "silver_sales.csv";
    pub const REJECTIONS_FILE: &'static str = "silver_rejections.csv";
    pub const REPORT_FILE: &'static str = "silver_report.json";

    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn paths(&self) -> SilverPaths {
        SilverPaths {
            sales: self.root.join(Self::SALES_FILE),
            rejections: self.root.join(Self::REJECTIONS_FILE),
            report: self.root.join(Self::REPORT_FILE),
        }
    }

    /// Replaces the previous silver output with this outcome.
    pub fn write(&self, outcome: &CleaningOutcome) -> Result<SilverPaths> {
        ensure_dir(&self.root)?;
        let paths = self.paths();

        let mut sales = clean_frame(&outcome.accepted)?;
        write_csv(&paths.sales, &mut sales)?;

        let mut rejections = rejections_frame(&outcome.rejected)?;
        write_csv(&paths.rejections, &mut rejections)?;

        let report = serde_json::to_string_pretty(&outcome.report)?;
        fs::write(&paths.report, report).map_err(|e| ReportError::FileWrite {
            path: paths.report.clone(),
            message: e.to_string(),
        })?;

        info!(
            sales = %paths.sales.display(),
            accepted = outcome.accepted.len(),
            rejected = outcome.rejected.len(),
            "wrote silver tables"
        );
        Ok(paths)
    }

    /// Reads the silver sales table with every column as text.
    pub fn load_sales(&self) -> Result<DataFrame> {
        let path = self.paths().sales;
        if !path.is_file() {
            return Err(ReportError::TableNotFound { path });
        }
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path.clone()))
            .map_err(|e| ReportError::CsvParse {
                path: path.clone(),
                message: e.to_string(),
            })?
            .finish()
            .map_err(|e| ReportError::CsvParse {
                path,
                message: e.to_string(),
            })
    }
}

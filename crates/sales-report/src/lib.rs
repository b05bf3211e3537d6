//! Sink side of the sales pipeline.
//!
//! - [`SilverTables`] writes the cleaned records, the rejection set and the
//!   cleaning report, replacing the previous run's output in full.
//! - [`gold`] aggregates the silver table into reporting tables.

mod error;
mod frames;
pub mod gold;
mod silver;

pub use error::{ReportError, Result};
pub use frames::{clean_frame, frame_rows, rejections_frame};
pub use gold::{GoldTable, build_gold, write_gold};
pub use silver::{SilverPaths, SilverTables};

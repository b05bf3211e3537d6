//! Shared utilities for the sales pipeline crates.
//!
//! Bronze tables arrive as loosely typed text, so every crate that touches a
//! polars frame needs the same conversions between `AnyValue` cells and plain
//! Rust values. They live here to keep ingest and report in agreement.

pub mod polars;

pub use polars::{
    any_to_f64, any_to_string, any_to_string_non_empty, cell_string, format_numeric, parse_f64,
};

//! Bronze → silver cleaning core.
//!
//! This crate turns a batch of raw sales records into a clean, internally
//! consistent silver batch plus a rejection set. Stages run in a fixed order,
//! each over the full output of the previous one:
//!
//! - **coercion**: loosely typed cells to typed values, failures become absent
//! - **imputation**: peer-group means, lag drop, total recompute, directional fill
//! - **derivation**: delivery date from purchase date and delivery lag
//! - **normalization::canonical**: payment method and category synonym tables
//! - **admission**: required-field filter and first-wins order-id dedupe
//!
//! [`clean_batch`] runs all of them. It never fails: absence is the universal
//! representation of anything that could not be resolved.

pub mod admission;
pub mod coercion;
pub mod derivation;
pub mod imputation;
pub mod normalization;
pub mod pipeline;
pub mod typed;

pub use pipeline::{clean_batch, sort_by_order_id};
pub use typed::TypedRecord;

//! Library side of the `sales-pipeline` binary.

pub mod logging;
pub mod pipeline;
pub mod types;

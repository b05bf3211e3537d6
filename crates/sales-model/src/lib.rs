pub mod error;
pub mod field;
pub mod options;
pub mod record;
pub mod rejection;
pub mod report;
pub mod vocabulary;

pub use error::{Result, SalesError};
pub use field::SalesField;
pub use options::CleaningOptions;
pub use record::{CleanRecord, RawRecord, RawValue};
pub use rejection::{RejectedRecord, RejectionReason};
pub use report::{CleaningOutcome, CleaningReport};
pub use vocabulary::{Canonical, Vocabulary};

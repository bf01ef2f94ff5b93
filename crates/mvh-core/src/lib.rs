#![deny(missing_docs)]
#![doc = "Core error types and identifiers shared across the MVH report crates."]

pub mod errors;
pub mod types;

pub use errors::{ErrorInfo, MvhError};
pub use types::{Metric, ProblemId};

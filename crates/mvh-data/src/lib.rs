//! Dataset loading and domain partitioning for MVH comparison reports.

pub mod load;
pub mod partition;
pub mod schema;

pub use load::{load_records, LoadSummary};
pub use partition::{partition_domain, DomainGroup};
pub use schema::{ComparisonRecord, EXPECTED_COLUMNS};

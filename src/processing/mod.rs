//! Processing of calculated blocks.
//!
//! - [`report`] - gathering every derived fact of a block
//! - [`batch`] - evaluating a JSON array of inputs

mod batch;
mod report;

// Re-export public functions
pub use batch::{evaluate_batch, read_batch_file, unique_blocks, BatchEntry, BatchOutcome};
pub(crate) use report::host_or_placeholder;
pub use report::{CidrReport, NO_HOST};

//! Evaluate many raw inputs at once.
//!
//! A batch file is a JSON array. Each element is evaluated on its own, so one
//! bad entry becomes an error row instead of failing the batch.

use super::report::CidrReport;
use crate::error::{AppError, CidrError};
use crate::models::CidrBlock;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Outcome for one element of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// Position in the input array.
    pub index: usize,
    /// The element as it appeared in the input.
    pub input: Value,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchOutcome {
    Ok { report: CidrReport },
    Error { kind: String, message: String },
}

impl BatchOutcome {
    fn from_result(result: Result<CidrBlock, CidrError>) -> BatchOutcome {
        match result {
            Ok(block) => BatchOutcome::Ok {
                report: CidrReport::from_block(&block),
            },
            Err(e) => BatchOutcome::Error {
                kind: e.kind().to_string(),
                message: e.to_string(),
            },
        }
    }
}

/// Read a JSON array of inputs from `path`.
pub fn read_batch_file(path: &Path) -> Result<Vec<Value>, AppError> {
    log::info!("Reading batch file: {}", path.display());
    let json = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&json).map_err(|source| AppError::BatchParse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(values) => {
            log::info!("# Got batch entry count = {}", values.len());
            Ok(values)
        }
        _ => Err(AppError::BatchShape {
            path: path.to_path_buf(),
        }),
    }
}

/// Evaluate every value, keeping input order.
pub fn evaluate_batch(values: &[Value]) -> Vec<BatchEntry> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| BatchEntry {
            index,
            input: value.clone(),
            outcome: BatchOutcome::from_result(CidrBlock::try_from(value)),
        })
        .collect()
}

/// Drop error rows, sort by block and remove repeated blocks.
///
/// Two inputs that parse to the same block (e.g. with and without surrounding
/// whitespace) count as repeats.
pub fn unique_blocks(values: &[Value]) -> Vec<CidrBlock> {
    let mut blocks: Vec<CidrBlock> = values
        .iter()
        .filter_map(|v| CidrBlock::try_from(v).ok())
        .collect();
    blocks.sort();
    blocks.dedup();
    blocks
}

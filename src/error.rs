//! Error types.
//!
//! [`CidrError`] covers everything that can go wrong turning raw text into a
//! [`crate::CidrBlock`]. [`AppError`] adds the failures of the command line
//! surface (files, JSON, logging setup).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("missing prefix in '{0}': expected exactly one '/' separator")]
    MissingPrefix(String),

    #[error("invalid input type: expected a string, found {0}")]
    InvalidType(String),

    #[error("malformed address '{address}': {reason}")]
    MalformedAddress { address: String, reason: String },

    #[error("invalid prefix length '{0}': expected an integer in 0..=32")]
    InvalidPrefixLength(String),
}

impl CidrError {
    pub(crate) fn malformed(address: &str, reason: impl Into<String>) -> Self {
        CidrError::MalformedAddress {
            address: address.to_string(),
            reason: reason.into(),
        }
    }

    /// Short stable name of the variant, used in CSV and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            CidrError::MissingPrefix(_) => "MissingPrefix",
            CidrError::InvalidType(_) => "InvalidType",
            CidrError::MalformedAddress { .. } => "MalformedAddress",
            CidrError::InvalidPrefixLength(_) => "InvalidPrefixLength",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Cidr(#[from] CidrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse batch file {path}: {source}")]
    BatchParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("batch file {path} must contain a JSON array")]
    BatchShape { path: PathBuf },

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl AppError {
    /// Process exit code for this error: 1 for rejected input, 2 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Cidr(_) => 1,
            _ => 2,
        }
    }
}

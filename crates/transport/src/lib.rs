use std::{error, fmt, result};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod normalizers;
pub mod records;

pub use normalizers::Normalizer;

/// Where a record being denormalized came from. Stored documents arrive
/// fully shaped, while client submitted payloads may leave nested structure
/// out (e.g. a feature whose coordinates have not been picked yet), so the
/// origin is passed along explicitly instead of being guessed from the
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Mongo,
    Json,
}

/// Raised when a record violates the wire shape contract, e.g. a feature
/// without any geometry. Documented absences (missing feature, empty
/// coordinates, missing category) never produce this; they degrade to
/// absent fields instead.
#[derive(Debug)]
pub enum DenormalizeError {
    MalformedRecord { reason: String },
}

impl DenormalizeError {
    pub fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DenormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { reason } => {
                write!(f, "malformed record: {}", reason)
            }
        }
    }
}

impl error::Error for DenormalizeError {}

pub type Result<T> = result::Result<T, DenormalizeError>;

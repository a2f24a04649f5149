//! Error types for dataset construction and loading.
//!
//! Validation failures are typed with `thiserror`; the file loaders wrap them
//! with `anyhow` context so the viewer can display the whole chain.

use thiserror::Error;

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors raised while building a [`Dataset`](crate::data::model::Dataset).
#[derive(Debug, Error)]
pub enum DatasetError {
    /// An appreciation label that is not one of the five known tiers.
    #[error("Unknown appreciation: {label:?}")]
    UnknownAppreciation { label: String },

    /// Two vehicles share the same identifier.
    #[error("Duplicate vehicle id: {id}")]
    DuplicateId { id: u32 },

    /// Reliability index outside of the 0-100 scale.
    #[error("Vehicle {id}: reliability index {value} is outside 0-100")]
    ReliabilityOutOfRange { id: u32, value: f64 },

    /// Brand or model is blank.
    #[error("Vehicle {id}: {field} is empty")]
    EmptyField { id: u32, field: &'static str },

    /// File extension not handled by the loader.
    #[error("Unsupported file format: .{extension}")]
    UnsupportedFormat { extension: String },

    /// Tabular file without one of the expected columns.
    #[error("Missing column: {column}")]
    MissingColumn { column: String },
}

impl DatasetError {
    /// Create an UnknownAppreciation error.
    pub fn unknown_appreciation(label: impl Into<String>) -> Self {
        Self::UnknownAppreciation {
            label: label.into(),
        }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a MissingColumn error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

//! Error types for xlsxwriter-lv-schema

use thiserror::Error;

/// Result type alias using [`SchemaError`]
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Inconsistencies found in the descriptor
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A type, constant or function is declared twice
    #[error("Duplicate declaration: {0}")]
    DuplicateName(String),

    /// A function or field points to an undeclared structure
    #[error("{owner} references undeclared structure {name}")]
    DanglingReference { owner: String, name: String },

    /// Structure not found by name
    #[error("Unknown structure: {0}")]
    UnknownStruct(String),

    /// Enumeration not found by name
    #[error("Unknown enumeration: {0}")]
    UnknownEnum(String),
}

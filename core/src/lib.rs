#![deny(missing_docs)]

//! # Basescan Core
//!
//! Core library for base-schema introspection and template-variable reporting.

/// Shared error types.
pub mod error;

/// Base schema model, record sampling and link relationships.
pub mod base;

/// Placeholder extraction and scan aggregation.
pub mod templates;

pub use base::{
    field_type_frequency, link_relationships, resolve_linked_names, BaseSchema, ExtractionMetadata,
    FieldKind, FieldSchema, LinkOptions, RecordSample, Relationship, Snapshot, TableReport,
    TableSchema, SAMPLE_CAP,
};
pub use error::{AppError, AppResult};
pub use templates::{extract_variables, variable_counts, ScanReport};

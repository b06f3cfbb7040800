//! # Base Introspection Module
//!
//! - **schema**: wire types for the remote base's schema endpoint.
//! - **snapshot**: record sampling, link relationships and the output artifact.

pub mod schema;
pub mod snapshot;

pub use schema::{BaseSchema, FieldKind, FieldSchema, LinkOptions, TableSchema};
pub use snapshot::{
    field_type_frequency, link_relationships, resolve_linked_names, ExtractionMetadata,
    RecordSample, Relationship, Snapshot, TableReport, SAMPLE_CAP,
};

//! # Extraction Snapshot
//!
//! Record sampling outcomes, link-relationship derivation and the JSON
//! artifact written at the end of a schema extraction.
//!
//! Relationships reference tables by opaque ID; target names become
//! resolvable only once every table has been enumerated, so
//! [`resolve_linked_names`] runs as a second pass over the finished
//! table collection.

use crate::base::schema::{FieldSchema, LinkOptions, TableSchema};
use crate::error::AppResult;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Maximum number of records fetched per table when approximating its size.
pub const SAMPLE_CAP: usize = 100;

/// Outcome of sampling one table's records.
///
/// Sampling failures are isolated per table: a failed table keeps its reason
/// here and contributes a zero count, and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSample {
    /// The sampling request succeeded.
    Counted {
        /// Number of records returned, at most [`SAMPLE_CAP`].
        count: usize,
        /// Whether the cap was reached, making `count` a lower bound.
        capped: bool,
    },

    /// The sampling request failed with the given reason.
    Failed(String),
}

impl RecordSample {
    /// Classifies a successful sample of `count` records.
    pub fn from_count(count: usize) -> Self {
        RecordSample::Counted {
            count,
            capped: count >= SAMPLE_CAP,
        }
    }

    /// The sampled record count; failed samples count as zero.
    pub fn count(&self) -> usize {
        match self {
            RecordSample::Counted { count, .. } => *count,
            RecordSample::Failed(_) => 0,
        }
    }

    /// Human-readable count: exact below the cap, `"N+"` at the cap
    /// (the true size is unknown beyond it), `"Error"` on failure.
    pub fn display(&self) -> String {
        match self {
            RecordSample::Counted { count, capped } => {
                if *capped {
                    format!("{}+", count)
                } else {
                    count.to_string()
                }
            }
            RecordSample::Failed(_) => String::from("Error"),
        }
    }
}

/// A cross-table link derived from a record-link field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Name of the table the link field lives in.
    pub source_table: String,

    /// Name of the link field.
    pub field_name: String,

    /// Opaque identifier of the target table, when the service provided one.
    pub linked_table_id: Option<String>,

    /// Whether this field is the reverse side of a link created elsewhere.
    pub is_reversed: bool,

    /// Resolved name of the target table. Absent until [`resolve_linked_names`]
    /// runs, and stays absent for identifiers no enumerated table matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_table_name: Option<String>,
}

/// Derives one [`Relationship`] per record-link field of `table`.
///
/// Absent or partial link options substitute `None`/`false` defaults.
pub fn link_relationships(table: &TableSchema) -> Vec<Relationship> {
    table
        .fields
        .iter()
        .filter(|field| field.field_type.is_record_link())
        .map(|field| {
            let options = LinkOptions::from_options(&field.options);
            Relationship {
                source_table: table.name.clone(),
                field_name: field.name.clone(),
                linked_table_id: options.linked_table_id,
                is_reversed: options.is_reversed,
                linked_table_name: None,
            }
        })
        .collect()
}

/// Second pass: fills `linked_table_name` for every relationship whose
/// `linked_table_id` matches an enumerated table.
pub fn resolve_linked_names(relationships: &mut [Relationship], tables: &[TableReport]) {
    let id_to_name: HashMap<&str, &str> = tables
        .iter()
        .map(|table| (table.id.as_str(), table.name.as_str()))
        .collect();

    for relationship in relationships {
        if let Some(name) = relationship
            .linked_table_id
            .as_deref()
            .and_then(|id| id_to_name.get(id))
        {
            relationship.linked_table_name = Some((*name).to_string());
        }
    }
}

/// One table's entry in the snapshot artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableReport {
    /// Human-readable table name.
    pub name: String,

    /// Opaque table identifier.
    pub id: String,

    /// Sampled record count (zero when sampling failed).
    pub record_count: usize,

    /// Display form of the count, carrying the lower-bound marker.
    pub record_count_display: String,

    /// Number of field definitions.
    pub field_count: usize,

    /// Field definitions, carried verbatim from the schema endpoint.
    pub fields: Vec<FieldSchema>,

    /// Free-form table description, when set.
    pub description: Option<String>,
}

impl TableReport {
    /// Combines a table's schema with its sampling outcome.
    pub fn from_schema(table: TableSchema, sample: &RecordSample) -> Self {
        TableReport {
            name: table.name,
            id: table.id,
            record_count: sample.count(),
            record_count_display: sample.display(),
            field_count: table.fields.len(),
            fields: table.fields,
            description: table.description,
        }
    }

    /// Whether the sample saw at least one record.
    pub fn has_data(&self) -> bool {
        self.record_count > 0
    }
}

/// Metadata block of the snapshot artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Identifier of the introspected base.
    pub base_id: String,

    /// RFC 3339 timestamp of when the extraction ran.
    pub extracted_at: String,

    /// Number of tables enumerated.
    pub total_tables: usize,

    /// Sum of sampled record counts across all tables.
    pub total_records_counted: usize,
}

/// The full output artifact: metadata plus the table and relationship
/// collections. Written once, never mutated thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Extraction metadata.
    pub extraction_metadata: ExtractionMetadata,

    /// Per-table entries in service order.
    pub tables: Vec<TableReport>,

    /// Derived link relationships.
    pub relationships: Vec<Relationship>,
}

impl Snapshot {
    /// Assembles the artifact, stamping the current UTC time and totals.
    pub fn new(
        base_id: impl Into<String>,
        tables: Vec<TableReport>,
        relationships: Vec<Relationship>,
    ) -> Self {
        let total_records_counted = tables.iter().map(|table| table.record_count).sum();
        Snapshot {
            extraction_metadata: ExtractionMetadata {
                base_id: base_id.into(),
                extracted_at: Utc::now().to_rfc3339(),
                total_tables: tables.len(),
                total_records_counted,
            },
            tables,
            relationships,
        }
    }

    /// Total field definitions across all tables.
    pub fn total_fields(&self) -> usize {
        self.tables.iter().map(|table| table.field_count).sum()
    }

    /// Serializes the artifact as 2-space-indented JSON with stable key order.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Occurrence count per field-type tag across all tables, descending by
/// count with alphabetical tie-break.
pub fn field_type_frequency(tables: &[TableReport]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for table in tables {
        for field in &table.fields {
            *counts.entry(field.field_type.wire_name()).or_default() += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

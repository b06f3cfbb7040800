//! # Schema Wire Types
//!
//! Deserialization targets for the base's schema-description endpoint.
//! Unknown payload keys are ignored so newer service revisions do not break
//! extraction; unknown field kinds round-trip through [`FieldKind::Other`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The field-type vocabulary of the remote service.
///
/// Variants mirror the service's camelCase type tags. Kinds introduced after
/// this list was written land in `Other` and keep their tag verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Short free-form text.
    SingleLineText,
    /// Long free-form text.
    MultilineText,
    /// Formatted long text.
    RichText,
    /// Email address.
    Email,
    /// URL.
    Url,
    /// Phone number.
    PhoneNumber,
    /// Numeric value.
    Number,
    /// Percentage value.
    Percent,
    /// Currency value.
    Currency,
    /// Star rating.
    Rating,
    /// Boolean checkbox.
    Checkbox,
    /// Duration value.
    Duration,
    /// Calendar date.
    Date,
    /// Date with time component.
    DateTime,
    /// Record creation timestamp.
    CreatedTime,
    /// Record modification timestamp.
    LastModifiedTime,
    /// Single-choice select.
    SingleSelect,
    /// Multi-choice select.
    MultipleSelects,
    /// Single collaborator reference.
    SingleCollaborator,
    /// Multiple collaborator references.
    MultipleCollaborators,
    /// File attachments.
    MultipleAttachments,
    /// Cross-table record links.
    MultipleRecordLinks,
    /// Values looked up through a link field.
    MultipleLookupValues,
    /// Computed formula.
    Formula,
    /// Aggregation over linked records.
    Rollup,
    /// Count of linked records.
    Count,
    /// Auto-incrementing number.
    AutoNumber,
    /// Barcode value.
    Barcode,
    /// Button action.
    Button,
    /// Record creator reference.
    CreatedBy,
    /// Last modifier reference.
    LastModifiedBy,
    /// Field synced from an external source.
    ExternalSyncSource,
    /// AI-generated text.
    AiText,
    /// Any kind this tool does not model explicitly.
    #[serde(untagged)]
    Other(String),
}

impl FieldKind {
    /// True for fields whose value references records in another table.
    pub fn is_record_link(&self) -> bool {
        matches!(self, FieldKind::MultipleRecordLinks)
    }

    /// The service's tag for this kind, as it appears on the wire.
    ///
    /// Serde owns the camelCase spelling, so we round-trip through it rather
    /// than duplicating the variant list here.
    pub fn wire_name(&self) -> String {
        match serde_json::to_value(self) {
            Ok(Value::String(tag)) => tag,
            _ => String::from("unknown"),
        }
    }
}

/// One field definition within a table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Human-readable field name.
    pub name: String,

    /// The service's type tag.
    #[serde(rename = "type")]
    pub field_type: FieldKind,

    /// Opaque field identifier.
    pub id: String,

    /// Type-specific configuration payload, carried verbatim.
    /// The shape varies by field kind; link fields get a typed view via
    /// [`LinkOptions::from_options`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// Typed view of a record-link field's options payload.
///
/// The service omits parts of this payload in some configurations, so every
/// member defaults when absent.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkOptions {
    /// Opaque identifier of the table the link points at.
    pub linked_table_id: Option<String>,

    /// Whether this field is the reverse side of a link created elsewhere.
    pub is_reversed: bool,

    /// Whether the field is configured to hold a single linked record.
    pub prefers_single_record_link: bool,

    /// Identifier of the inverse link field on the target table.
    pub inverse_link_field_id: Option<String>,
}

impl LinkOptions {
    /// Extracts the typed link configuration from a raw options payload.
    ///
    /// Absent, partial or malformed payloads yield the all-default view
    /// (`None` ids, `false` flags) rather than an error.
    pub fn from_options(options: &Option<Value>) -> Self {
        options
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }
}

/// One table's schema: identity, field definitions and optional description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Opaque table identifier.
    pub id: String,

    /// Human-readable table name.
    pub name: String,

    /// Free-form table description, when set.
    #[serde(default)]
    pub description: Option<String>,

    /// Field definitions in service order.
    pub fields: Vec<FieldSchema>,
}

/// Response envelope of the schema-description endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSchema {
    /// Tables in service order.
    pub tables: Vec<TableSchema>,
}

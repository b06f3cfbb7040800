#![deny(missing_docs)]

//! # Schema Command
//!
//! Fetches the remote base's schema, samples per-table record counts,
//! derives link relationships and writes the snapshot artifact.
//!
//! Per-table isolation: a failed record sample is folded into the report as
//! a zero count and the run continues; only the initial schema fetch (and
//! missing configuration, handled by clap before we get here) is fatal.

use crate::client::SchemaSource;
use crate::error::CliResult;
use crate::render::{banner, grid};
use basescan_core::{
    field_type_frequency, link_relationships, resolve_linked_names, RecordSample, Relationship,
    Snapshot, TableReport,
};
use chrono::Local;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the schema command.
#[derive(clap::Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Identifier of the base to introspect.
    #[clap(long, env = "AIRTABLE_BASE_ID")]
    pub base_id: String,

    /// Personal access token used for authentication.
    #[clap(long, env = "AIRTABLE_PAT", hide_env_values = true)]
    pub pat: String,

    /// Path of the JSON snapshot to write.
    #[clap(long, default_value = "new_base_schema.json")]
    pub output: PathBuf,
}

/// Executes the extraction against `source` and writes the snapshot.
pub fn execute(args: &ExtractArgs, source: &impl SchemaSource) -> CliResult<()> {
    println!("Extracting schema from base: {}", args.base_id);
    println!(
        "Extraction started at: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    println!("Fetching base schema...");
    let schema = source.fetch_schema()?;
    println!("Found {} tables\n", schema.tables.len());

    let mut tables: Vec<TableReport> = Vec::with_capacity(schema.tables.len());
    let mut relationships: Vec<Relationship> = Vec::new();

    for table in schema.tables {
        info!("Processing table: {} ({})", table.name, table.id);

        let sample = match source.sample_records(&table.id) {
            Ok(count) => RecordSample::from_count(count),
            Err(e) => {
                warn!("Could not count records for {}: {}", table.name, e);
                RecordSample::Failed(e.to_string())
            }
        };

        relationships.extend(link_relationships(&table));

        let report = TableReport::from_schema(table, &sample);
        info!(
            "  {} fields, {} records",
            report.field_count, report.record_count_display
        );
        tables.push(report);
    }

    // Names resolve only now that every table is known.
    resolve_linked_names(&mut relationships, &tables);

    let snapshot = Snapshot::new(args.base_id.clone(), tables, relationships);
    fs::write(&args.output, snapshot.to_json()?)?;
    println!("Schema saved to: {}\n", args.output.display());

    print_summary(&snapshot, &args.output);
    Ok(())
}

/// Prints the per-table grid, the relationship grid (when any exist) and the
/// field-type distribution, followed by the closing totals.
fn print_summary(snapshot: &Snapshot, output: &Path) {
    banner("SCHEMA SUMMARY");
    println!();

    let mut rows = vec![["Table Name", "Fields", "Records", "Status"].map(String::from)];
    for table in &snapshot.tables {
        rows.push([
            table.name.clone(),
            table.field_count.to_string(),
            table.record_count_display.clone(),
            if table.has_data() {
                "Has Data".to_string()
            } else {
                "Empty".to_string()
            },
        ]);
    }
    println!("{}", grid(rows));

    if !snapshot.relationships.is_empty() {
        println!("\nRELATIONSHIPS ({} total)\n", snapshot.relationships.len());

        let mut rows = vec![["Source Table", "Field Name", "Linked Table", "Direction"]
            .map(String::from)];
        for relationship in &snapshot.relationships {
            rows.push([
                relationship.source_table.clone(),
                relationship.field_name.clone(),
                relationship
                    .linked_table_name
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                if relationship.is_reversed {
                    "Reversed".to_string()
                } else {
                    "Forward".to_string()
                },
            ]);
        }
        println!("{}", grid(rows));
    }

    println!("\nFIELD TYPE DISTRIBUTION\n");
    let mut rows = vec![["Field Type", "Count"].map(String::from)];
    for (field_type, count) in field_type_frequency(&snapshot.tables) {
        rows.push([field_type, count.to_string()]);
    }
    println!("{}", grid(rows));

    println!("\nExtraction complete!");
    println!("Output saved to: {}", output.display());
    println!("Total tables: {}", snapshot.extraction_metadata.total_tables);
    println!("Total fields: {}", snapshot.total_fields());
    println!(
        "Total records counted: {}",
        snapshot.extraction_metadata.total_records_counted
    );
}

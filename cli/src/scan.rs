#![deny(missing_docs)]

//! # Templates Command
//!
//! Walks a template tree, extracts `{{$json.*}}` substitution placeholders
//! and prints the aggregated usage report.

use crate::error::{CliError, CliResult};
use crate::render::banner;
use basescan_core::templates::{extract_variables, variable_counts, ScanReport};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Arguments for the templates command.
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Root directory containing the template documents.
    #[clap(long, default_value = "Email Templates")]
    pub dir: PathBuf,

    /// File extension of template documents.
    #[clap(long, default_value = "html")]
    pub ext: String,
}

/// Executes the template scan and prints the report.
///
/// A missing root directory is fatal; unreadable documents are skipped with
/// a warning and contribute nothing.
pub fn execute(args: &ScanArgs) -> CliResult<()> {
    if !args.dir.is_dir() {
        return Err(CliError::General(format!(
            "Directory {:?} not found",
            args.dir
        )));
    }

    banner("TEMPLATE VARIABLE SCANNER");
    println!();

    let report = scan_directory(&args.dir, &args.ext)?;
    print_report(&report);
    Ok(())
}

/// Discovers all matching documents under `root` (lexicographic path order)
/// and aggregates their placeholder occurrences.
fn scan_directory(root: &Path, ext: &str) -> CliResult<ScanReport> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|e| e == ext))
        .collect();
    paths.sort();

    println!("Found {} template files\n", paths.len());

    let mut report = ScanReport::new();
    for path in &paths {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                continue;
            }
        };

        let relative = path.strip_prefix(root).unwrap_or(path);
        report.record(
            relative.to_string_lossy(),
            extract_variables(&content),
        );
    }

    Ok(report)
}

/// Prints the full scan report: unique variables, per-document breakdown,
/// summary counts and the top-10 frequency ranking.
fn print_report(report: &ScanReport) {
    let unique = report.unique_variables();

    banner(&format!("UNIQUE VARIABLES FOUND: {}", unique.len()));
    println!();
    for (i, var) in unique.iter().enumerate() {
        println!("{:2}. {{{{$json.{}}}}}", i + 1, var);
    }

    println!();
    banner("VARIABLES BY FILE");
    for (path, occurrences) in report.files() {
        let counts = variable_counts(occurrences);
        println!("\nFile: {}", path);
        println!("   Variables ({} unique):", counts.len());
        for (var, count) in counts {
            println!("      - {} (used {}x)", var, count);
        }
    }

    println!();
    banner("SUMMARY");
    println!("Total templates scanned: {}", report.file_count());
    println!("Total unique variables: {}", unique.len());
    println!();

    println!("Most frequently used variables:");
    for (var, count) in report.top_variables(10) {
        println!("  - {}: {} occurrences", var, count);
    }
}

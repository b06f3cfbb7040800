#![deny(missing_docs)]

//! # Basescan CLI
//!
//! Command Line Interface for base-schema introspection and template reporting.
//!
//! Supported Commands:
//! - `templates`: Scans a template tree for `{{$json.*}}` placeholders.
//! - `schema`: Extracts a remote base's schema into a JSON snapshot.

use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::client::AirtableClient;
use crate::error::CliResult;

mod client;
mod error;
mod extract;
mod render;
mod scan;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Base introspection and template reporting CLI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan template documents for substitution placeholders.
    Templates(scan::ScanArgs),
    /// Extract the base schema and write the JSON snapshot.
    Schema(extract::ExtractArgs),
}

fn main() -> CliResult<()> {
    // `.env` must load before clap resolves `env = "..."` fallbacks.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Templates(args) => {
            scan::execute(args)?;
        }
        Commands::Schema(args) => {
            // Injecting the hosted HTTP client
            let client = AirtableClient::new(&args.base_id, &args.pat);
            extract::execute(args, &client)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn schema_requires_base_id_and_pat() {
        // Required values come from flags or the environment; with neither,
        // parsing fails before any client could be constructed.
        std::env::remove_var("AIRTABLE_BASE_ID");
        std::env::remove_var("AIRTABLE_PAT");
        assert!(Cli::try_parse_from(["basescan", "schema"]).is_err());
    }

    #[test]
    fn templates_defaults() {
        let cli = Cli::try_parse_from(["basescan", "templates"]).unwrap();
        match cli.command {
            Commands::Templates(args) => {
                assert_eq!(args.dir, std::path::PathBuf::from("Email Templates"));
                assert_eq!(args.ext, "html");
            }
            _ => panic!("Wrong subcommand"),
        }
    }
}

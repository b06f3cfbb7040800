#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use basescan_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// HTTP transport or status failure from the remote service.
    #[display("HTTP Error: {}", _0)]
    Http(ureq::Error),

    /// JSON (de)serialization failure.
    #[display("JSON Error: {}", _0)]
    Json(serde_json::Error),

    /// Error propagated from the core library.
    #[display("{}", _0)]
    Core(AppError),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the `General(String)`
/// variant contains a `String`, which does not implement `std::error::Error`, causing
/// auto-derived `source()` implementations to fail compilation.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::Io(_)));
    }

    #[test]
    fn test_core_conversion() {
        let core_err = AppError::General("bad".to_string());
        let cli_err: CliError = core_err.into();
        assert_eq!(format!("{}", cli_err), "General Error: bad");
    }

    #[test]
    fn test_general_display() {
        let cli_err = CliError::General("boom".to_string());
        assert_eq!(format!("{}", cli_err), "Operation failed: boom");
    }
}

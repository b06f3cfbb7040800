#![deny(missing_docs)]

//! # Remote Base Client
//!
//! Thin blocking client for the remote base's schema-description and record
//! endpoints. Strictly sequential: one schema call, then at most one record
//! call per table.

use crate::error::CliResult;
use basescan_core::{BaseSchema, SAMPLE_CAP};
use serde::Deserialize;
use std::time::Duration;

/// Where schemas and record counts come from.
///
/// Abstracted to allow mocking the remote service in tests without network access.
pub trait SchemaSource {
    /// Fetches the base's full table and field schema in one call.
    fn fetch_schema(&self) -> CliResult<BaseSchema>;

    /// Fetches up to [`SAMPLE_CAP`] records from one table and returns how
    /// many came back.
    fn sample_records(&self, table_id: &str) -> CliResult<usize>;
}

const API_ROOT: &str = "https://api.airtable.com/v0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client backed by the hosted HTTP API.
pub struct AirtableClient {
    agent: ureq::Agent,
    api_root: String,
    base_id: String,
    token: String,
}

/// Minimal view of a records page; only the record count matters here.
#[derive(Debug, Deserialize)]
struct RecordPage {
    #[serde(default)]
    records: Vec<serde_json::Value>,
}

impl AirtableClient {
    /// Creates a client for `base_id`, authenticating with `token`.
    pub fn new(base_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_api_root(API_ROOT, base_id, token)
    }

    /// Creates a client against a non-default API root.
    pub fn with_api_root(
        api_root: impl Into<String>,
        base_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();

        AirtableClient {
            agent,
            api_root: api_root.into(),
            base_id: base_id.into(),
            token: token.into(),
        }
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl SchemaSource for AirtableClient {
    fn fetch_schema(&self) -> CliResult<BaseSchema> {
        let url = format!("{}/meta/bases/{}/tables", self.api_root, self.base_id);
        let mut response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header())
            .call()?;

        Ok(response.body_mut().read_json::<BaseSchema>()?)
    }

    fn sample_records(&self, table_id: &str) -> CliResult<usize> {
        // Table IDs are opaque and URL-safe, unlike table names.
        let url = format!("{}/{}/{}", self.api_root, self.base_id, table_id);
        let cap = SAMPLE_CAP.to_string();
        let mut response = self
            .agent
            .get(&url)
            .query("maxRecords", &cap)
            .query("pageSize", &cap)
            .header("Authorization", &self.auth_header())
            .call()?;

        let page: RecordPage = response.body_mut().read_json()?;
        Ok(page.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_format() {
        let client = AirtableClient::new("appBase", "patSecret");
        assert_eq!(client.auth_header(), "Bearer patSecret");
        assert_eq!(client.api_root, API_ROOT);
    }

    #[test]
    fn test_record_page_parsing() {
        let page: RecordPage = serde_json::from_str(
            r#"{ "records": [ { "id": "rec1", "fields": {} }, { "id": "rec2", "fields": {} } ] }"#,
        )
        .unwrap();
        assert_eq!(page.records.len(), 2);

        // Some error payloads omit `records` entirely.
        let empty: RecordPage = serde_json::from_str("{}").unwrap();
        assert!(empty.records.is_empty());
    }
}

//! Run configuration.
//!
//! Everything a run needs is resolved once from the command line into an
//! [`ExportConfig`] and passed down explicitly. There is no config file, no
//! environment lookup and no global state: the credentials are per-run by
//! nature and the output layout is fixed.

use std::path::PathBuf;

/// Production API endpoint. Tests point `--api-url` at a local stand-in.
pub const DEFAULT_API_URL: &str = "https://api.ringba.com/v2";

/// Settings for a single export run, fixed at argument-parse time.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Ringba account the resources belong to.
    pub account_id: String,
    /// API key sent as the `Authorization: Token ...` header.
    pub api_key: String,
    /// API base URL, overridable for tests and staging.
    pub api_url: String,
    /// Directory the per-account output directory is created under.
    pub output_root: PathBuf,
}

impl ExportConfig {
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            output_root: PathBuf::from("output"),
        }
    }

    /// Per-account output directory: `{output_root}/{account_id}`.
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(&self.account_id)
    }
}

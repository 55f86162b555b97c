//! Ringba Export Library
//!
//! Pulls five resource collections from the Ringba REST API (publishers,
//! buyers, pingtrees, pingtree targets and targets) and writes each one to
//! disk twice: the raw response body as pretty-printed JSON, and a flattened
//! CSV with per-entity monthly usage attached.
//!
//! ## Core Behavior
//!
//! - **Sequential pipeline**: kinds are fetched, persisted and flattened one
//!   after another, so an aborted run leaves completed kinds fully exported
//! - **Raw body first**: the JSON file is written before any transformation,
//!   keeping the raw payload recoverable when a response is malformed
//! - **Open records**: exported rows are field maps, not fixed structs, so
//!   the CSV widens with whatever the API returns
//!
//! ## Architecture Overview
//!
//! - [`models`] - resource kinds, statistics shapes and the record type
//! - [`api`] - authenticated REST client and the fetch error type
//! - [`stats`] - entity projection and usage-stats merging
//! - [`csv`] - generic record-to-CSV flattening
//! - [`export`] - the sequential orchestrator
//! - [`config`] - run configuration resolved from the command line
//! - [`logging`] - structured logging setup
//!
//! ## Main Entry Point
//!
//! The primary interface is [`RingbaExporter`]:
//!
//! ```rust,no_run
//! use ringba_export::{ExportConfig, RingbaExporter};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ExportConfig::new("RA0123456789", "api-key");
//! RingbaExporter::new(&config).run().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod csv;
pub mod export;
pub mod logging;
pub mod models;
pub mod stats;

pub use api::{ExportError, RingbaClient};
pub use config::ExportConfig;
pub use export::RingbaExporter;
pub use models::{ExportRecord, ResourceKind, StatsShape};

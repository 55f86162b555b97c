//! The export pipeline.
//!
//! Drives each resource kind through fetch, raw JSON persistence, stats
//! merge and CSV flattening, strictly in sequence. Any failure aborts the
//! remaining kinds; files already written stay on disk.

use crate::api::RingbaClient;
use crate::config::ExportConfig;
use crate::csv::to_csv;
use crate::models::ResourceKind;
use crate::stats::merge_stats;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct RingbaExporter {
    client: RingbaClient,
    account_id: String,
    output_dir: PathBuf,
}

impl RingbaExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            client: RingbaClient::new(config),
            account_id: config.account_id.clone(),
            output_dir: config.output_dir(),
        }
    }

    /// Run the full export: all five kinds, in a fixed order.
    pub async fn run(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;
        println!("Output directory: {}", self.output_dir.display());

        // One date stamp per run; every CSV written by the run shares it.
        let date = Utc::now().format("%Y-%m-%d").to_string();

        for kind in ResourceKind::ALL {
            self.export_kind(kind, &date).await?;
        }

        Ok(())
    }

    /// Export one collection: fetch with stats, persist the raw body, then
    /// flatten the merged records to CSV. The raw JSON is written before any
    /// transformation so it survives a malformed collection.
    async fn export_kind(&self, kind: ResourceKind, date: &str) -> Result<()> {
        debug!(kind = %kind, "exporting resource kind");
        let collection = self.client.fetch_collection(kind, true).await?;
        self.write_raw_json(kind, &collection)?;

        let items = merge_stats(&collection, kind.body_key(), kind.stats_shape())
            .with_context(|| format!("Failed to process {kind} response"))?;
        println!("Found {} {}", items.len().to_string().bold(), kind);

        let csv_path = self.output_dir.join(format!(
            "{}-{}-{}.csv",
            kind.path(),
            self.account_id,
            date
        ));
        fs::write(&csv_path, to_csv(&items))
            .with_context(|| format!("Failed to write {}", csv_path.display()))?;
        println!(
            "Exported {} to {}",
            kind,
            csv_path.display().to_string().cyan()
        );

        Ok(())
    }

    fn write_raw_json(&self, kind: ResourceKind, collection: &Value) -> Result<()> {
        let json_path = self
            .output_dir
            .join(format!("{}-data.json", kind.body_key()));
        let pretty = serde_json::to_string_pretty(collection)
            .context("Failed to serialize API response")?;
        fs::write(&json_path, pretty)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        info!(path = %json_path.display(), "wrote raw collection body");
        Ok(())
    }
}

//! Core Data Models
//!
//! This module defines the data structures shared across the export pipeline:
//! the five resource kinds the Ringba API exposes, the two statistics layouts
//! those kinds use, and the open record type the stats merger hands to the
//! CSV flattener.
//!
//! ## Data Flow
//!
//! 1. **Raw Data**: the API client fetches one collection body per
//!    [`ResourceKind`] as untyped JSON
//! 2. **Projection**: the stats merger folds each body into [`ExportRecord`]s,
//!    reading usage counters through [`UsageCounters`] / [`NestedStats`]
//! 3. **Output**: records are flattened to CSV, the raw body is kept as JSON

use serde::Deserialize;
use serde_json::{Number, Value};
use std::fmt;

/// One exported entity as an open field mapping.
///
/// The merger always emits `id`, `name`, `data` and `monthly`; the CSV
/// flattener works over whatever keys are present, so additional per-kind
/// fields widen the sheet without a schema change.
pub type ExportRecord = serde_json::Map<String, Value>;

/// The five Ringba collections this tool exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Publishers,
    Buyers,
    Pingtrees,
    PingtreeTargets,
    Targets,
}

impl ResourceKind {
    /// Export order. A run processes kinds strictly in this sequence.
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Publishers,
        ResourceKind::Buyers,
        ResourceKind::Pingtrees,
        ResourceKind::PingtreeTargets,
        ResourceKind::Targets,
    ];

    /// URL path segment, also used in CSV file names and progress output.
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Publishers => "publishers",
            ResourceKind::Buyers => "buyers",
            ResourceKind::Pingtrees => "pingtrees",
            ResourceKind::PingtreeTargets => "pingtreetargets",
            ResourceKind::Targets => "targets",
        }
    }

    /// Key under which the API nests the entity list in the response body.
    /// Multi-word kinds are mixed case here while the URL path stays all
    /// lowercase.
    pub fn body_key(&self) -> &'static str {
        match self {
            ResourceKind::Publishers => "publishers",
            ResourceKind::Buyers => "buyers",
            ResourceKind::Pingtrees => "pingTrees",
            ResourceKind::PingtreeTargets => "pingTreeTargets",
            ResourceKind::Targets => "targets",
        }
    }

    /// Publishers carry usage counters at the top level of each stats record;
    /// every other kind nests them under `usageStats`.
    pub fn stats_shape(&self) -> StatsShape {
        match self {
            ResourceKind::Publishers => StatsShape::Flat,
            _ => StatsShape::Nested,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The two statistics record layouts the API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsShape {
    /// Counters directly on the record (publishers).
    Flat,
    /// Counters nested under `usageStats` (all other kinds).
    Nested,
}

/// Call-volume counters attached to a resource collection response.
///
/// Only `currentMonth` is consumed downstream; the rest are decoded so a
/// counter of an unexpected type fails the run instead of slipping through.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageCounters {
    pub total: Option<Number>,
    #[serde(rename = "currentMonth")]
    pub current_month: Option<Number>,
    #[serde(rename = "currentDay")]
    pub current_day: Option<Number>,
    #[serde(rename = "currentHour")]
    pub current_hour: Option<Number>,
    #[serde(rename = "currentLive")]
    pub current_live: Option<Number>,
}

/// Stats record layout for every non-publisher kind. `usageStats` is not
/// optional: a record missing it is malformed and must fail the run rather
/// than quietly export a null.
#[derive(Debug, Clone, Deserialize)]
pub struct NestedStats {
    #[serde(rename = "usageStats")]
    pub usage_stats: UsageCounters,
}

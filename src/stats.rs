//! Entity projection and usage-stats merging.
//!
//! A collection body arrives as untyped JSON: the entity list under the
//! kind's body key, optionally accompanied by a top-level `stats` map keyed
//! by entity id. This module projects each entity into the export envelope
//! and folds the matching monthly counter into it.

use crate::models::{ExportRecord, NestedStats, StatsShape, UsageCounters};
use anyhow::{Context, Result};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Project the entity list out of a raw collection body and fold the
/// body's stats map into it.
///
/// Entities are keyed by id while merging, so a duplicate id collapses to
/// the last-seen entity. Output is sorted by id.
pub fn merge_stats(
    collection: &Value,
    body_key: &str,
    shape: StatsShape,
) -> Result<Vec<ExportRecord>> {
    let entities = collection
        .get(body_key)
        .and_then(Value::as_array)
        .with_context(|| format!("response body has no `{body_key}` array"))?;

    let mut items: BTreeMap<String, ExportRecord> = BTreeMap::new();
    for entity in entities {
        let id = entity
            .get("id")
            .and_then(Value::as_str)
            .with_context(|| format!("`{body_key}` entity has no string `id`"))?;
        items.insert(id.to_string(), project_entity(id, entity));
    }

    if let Some(stats) = collection.get("stats").and_then(Value::as_object) {
        for (key, record) in stats {
            // The API keys stats with a lowercase first letter while the
            // entity ids start uppercase.
            let normalized = normalize_stats_key(key);
            let Some(item) = items.get_mut(&normalized) else {
                debug!(key, normalized, "stats entry matches no entity, dropped");
                continue;
            };
            let monthly = extract_monthly(record, shape)
                .with_context(|| format!("malformed stats record for `{key}`"))?;
            item.insert(
                "monthly".to_string(),
                monthly.map_or(Value::Null, Value::Number),
            );
        }
    }

    Ok(items.into_values().collect())
}

/// Build the export envelope for one raw entity: its id and name, the whole
/// entity re-serialized as a JSON string, and a `monthly` slot for the
/// stats pass to fill.
fn project_entity(id: &str, entity: &Value) -> ExportRecord {
    let mut record = ExportRecord::new();
    record.insert("id".to_string(), Value::String(id.to_string()));
    record.insert(
        "name".to_string(),
        entity.get("name").cloned().unwrap_or(Value::Null),
    );
    record.insert("data".to_string(), Value::String(entity.to_string()));
    record.insert("monthly".to_string(), Value::Null);
    record
}

/// Uppercase the first character of a stats key, leaving the rest alone.
pub fn normalize_stats_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pull `currentMonth` out of one stats record according to its shape.
///
/// An absent counter is `Ok(None)`; a record that does not match its
/// declared shape is an error.
pub fn extract_monthly(record: &Value, shape: StatsShape) -> Result<Option<Number>> {
    match shape {
        StatsShape::Flat => {
            let counters: UsageCounters = serde_json::from_value(record.clone())?;
            Ok(counters.current_month)
        }
        StatsShape::Nested => {
            let nested: NestedStats = serde_json::from_value(record.clone())?;
            Ok(nested.usage_stats.current_month)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_first_character_only() {
        assert_eq!(normalize_stats_key("abc123"), "Abc123");
        assert_eq!(normalize_stats_key("Abc123"), "Abc123");
        assert_eq!(normalize_stats_key("aBC"), "ABC");
    }

    #[test]
    fn test_normalize_empty_and_single_char_keys() {
        assert_eq!(normalize_stats_key(""), "");
        assert_eq!(normalize_stats_key("a"), "A");
        assert_eq!(normalize_stats_key("7x"), "7x");
    }
}

//! Tolerant field deserializers for hand-edited registry files.
//!
//! A registry is only rejected when it is not a JSON object; individual
//! fields holding the wrong JSON type degrade to something displayable
//! instead of failing the whole read.

use super::registry_types::{Project, RegistryType};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a scalar as text; objects, arrays and null become `None`
pub(super) fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub(super) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

/// Keep any present value, `null` included
pub(super) fn raw_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Value::deserialize(deserializer)?))
}

pub(super) fn opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(super) fn opt_registry_type<'de, D>(deserializer: D) -> Result<Option<RegistryType>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

pub(super) fn projects<'de, D>(deserializer: D) -> Result<Vec<Project>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!("Ignoring non-array 'projects' field: {}", other);
            return Ok(Vec::new());
        }
    };

    let mut projects = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            tracing::warn!("Skipping project entry #{}: not a JSON object", index);
            continue;
        }
        match serde_json::from_value::<Project>(item) {
            Ok(project) => projects.push(project),
            Err(e) => tracing::warn!("Skipping project entry #{}: {}", index, e),
        }
    }
    Ok(projects)
}

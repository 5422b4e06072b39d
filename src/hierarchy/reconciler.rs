//! Frontmatter reconciliation policy.
//!
//! Brings a note's existing frontmatter into agreement with the canonical
//! hierarchy values for its position in the vault:
//!
//! 1. Fields at levels within the note's max level are set to their
//!    canonical value when missing, empty, or different - a wrong but
//!    non-empty value is overwritten, not left alone.
//! 2. Hierarchy fields beyond the max level are removed unconditionally
//!    (a main index strips all four).
//! 3. Index files get `index-type` set to the derived type; content files
//!    must not carry the key at all.
//! 4. Every other key passes through untouched, in its original order.
//!
//! Malformed values (a list where a scalar belongs, a number, null) never
//! fail reconciliation; any value that is not exactly the canonical string
//! counts as different and is overwritten per rule 1.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::models::keys::{frontmatter, level_of_field};
use crate::models::IndexType;

/// What happened to one frontmatter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Corrected,
    Removed,
}

/// One entry in the reconciliation change log.
///
/// Old and new values are rendered to display strings so the log can be
/// serialized into run reports and audit output as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<String>,
    pub kind: ChangeKind,
}

/// Updated frontmatter plus the log of what changed.
#[derive(Debug, Clone)]
pub struct ReconciliationResult {
    pub frontmatter: Mapping,
    pub changes: Vec<FieldChange>,
}

impl ReconciliationResult {
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Apply the reconciliation policy to one note's frontmatter.
///
/// `canonical` holds the field/value pairs for levels `1..=max_level` in
/// level order. The input mapping is not modified; the result carries a
/// rebuilt mapping with passthrough keys in their original order, updated
/// hierarchy fields in place, and newly added fields appended in level
/// order.
pub fn reconcile(
    existing: &Mapping,
    canonical: &[(&'static str, String)],
    max_level: usize,
    index_type: IndexType,
) -> ReconciliationResult {
    let mut updated = Mapping::new();
    let mut changes = Vec::new();
    let mut seen_fields: Vec<&str> = Vec::new();
    let mut seen_index_type = false;

    for (key, value) in existing {
        let Some(name) = key.as_str() else {
            // Non-string keys are opaque passthrough data.
            updated.insert(key.clone(), value.clone());
            continue;
        };

        if let Some(level) = level_of_field(name) {
            if level > max_level {
                changes.push(FieldChange {
                    field: name.to_string(),
                    old: Some(render_value(value)),
                    new: None,
                    kind: ChangeKind::Removed,
                });
                continue;
            }

            let canonical_value = &canonical[level - 1].1;
            if !value_matches(value, canonical_value) {
                changes.push(FieldChange {
                    field: name.to_string(),
                    old: Some(render_value(value)),
                    new: Some(canonical_value.clone()),
                    kind: ChangeKind::Corrected,
                });
            }
            updated.insert(key.clone(), Value::from(canonical_value.as_str()));
            seen_fields.push(canonical[level - 1].0);
            continue;
        }

        if name == frontmatter::INDEX_TYPE {
            if !index_type.is_index() {
                changes.push(FieldChange {
                    field: name.to_string(),
                    old: Some(render_value(value)),
                    new: None,
                    kind: ChangeKind::Removed,
                });
                continue;
            }

            if !value_matches(value, index_type.as_str()) {
                changes.push(FieldChange {
                    field: name.to_string(),
                    old: Some(render_value(value)),
                    new: Some(index_type.as_str().to_string()),
                    kind: ChangeKind::Corrected,
                });
            }
            updated.insert(key.clone(), Value::from(index_type.as_str()));
            seen_index_type = true;
            continue;
        }

        updated.insert(key.clone(), value.clone());
    }

    for (field, canonical_value) in canonical {
        if seen_fields.contains(field) {
            continue;
        }
        changes.push(FieldChange {
            field: field.to_string(),
            old: None,
            new: Some(canonical_value.clone()),
            kind: ChangeKind::Added,
        });
        updated.insert(Value::from(*field), Value::from(canonical_value.as_str()));
    }

    if index_type.is_index() && !seen_index_type {
        changes.push(FieldChange {
            field: frontmatter::INDEX_TYPE.to_string(),
            old: None,
            new: Some(index_type.as_str().to_string()),
            kind: ChangeKind::Added,
        });
        updated.insert(
            Value::from(frontmatter::INDEX_TYPE),
            Value::from(index_type.as_str()),
        );
    }

    ReconciliationResult {
        frontmatter: updated,
        changes,
    }
}

/// A value matches only when it is exactly the canonical string. Empty
/// strings and nulls count as missing; sequences, numbers and anything
/// else count as different and get overwritten.
fn value_matches(value: &Value, canonical: &str) -> bool {
    matches!(value, Value::String(text) if text == canonical)
}

/// Render an arbitrary YAML value for the change log.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "~".to_string(),
        Value::String(text) => text.clone(),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim_end().to_string())
            .unwrap_or_else(|_| "<unrenderable>".to_string()),
    }
}

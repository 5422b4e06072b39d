//! Metadata hierarchy detection and reconciliation.
//!
//! The vault taxonomy has four recognized levels below the root:
//! Program → Course → Class → Module. Every note's position in the folder
//! tree determines which hierarchy fields its frontmatter may carry and
//! what their values must be. This module classifies a note's path,
//! derives the canonical field values, and reconciles them against the
//! note's existing frontmatter.
//!
//! # Invariants
//! - A hierarchy field at level L appears in output iff L ≤ the note's
//!   effective max level.
//! - A stored `index-type` value is never authoritative; the type is
//!   re-derived from the path on every call.
//! - Non-hierarchy keys pass through untouched, in their original order.
//! - Reconciliation is idempotent: a second pass over its own output
//!   produces an empty change log.
//!
//! Every function here is pure given its inputs; no filesystem access, no
//! process-wide caches.

pub mod classifier;
pub mod reconciler;
pub mod resolver;

pub use classifier::{classify, Classification, HierarchyError};
pub use reconciler::{reconcile, ChangeKind, FieldChange, ReconciliationResult};
pub use resolver::{
    derive_index_type, effective_max_level, resolve_canonical_values, MAX_HIERARCHY_DEPTH,
};

use crate::models::IndexType;
use serde_yaml::Mapping;
use std::path::Path;

/// Classify one note and reconcile its frontmatter in a single call.
///
/// This is the in-process entry point for callers that already hold a
/// parsed frontmatter mapping: classify the path, derive the index-type
/// and canonical values, and apply the update policy. Reading and writing
/// the note file stays with the caller.
pub fn reconcile_frontmatter(
    vault_root: &Path,
    file_path: &Path,
    existing: &Mapping,
) -> Result<(IndexType, ReconciliationResult), HierarchyError> {
    let classification = classifier::classify(vault_root, file_path)?;
    let index_type = resolver::derive_index_type(&classification);
    let canonical = resolver::resolve_canonical_values(&classification, index_type);
    let max_level = resolver::effective_max_level(&classification, index_type);
    let result = reconciler::reconcile(existing, &canonical, max_level, index_type);
    Ok((index_type, result))
}

//! Index-type derivation and canonical hierarchy values.

use crate::hierarchy::classifier::Classification;
use crate::models::keys::HIERARCHY_FIELDS;
use crate::models::IndexType;

/// Module is the deepest recognized hierarchy level. Folders may nest
/// further; everything below level four is content within a module.
pub const MAX_HIERARCHY_DEPTH: usize = 4;

/// Derive the index-type from a classification.
///
/// This is a pure function of the path and always overrides whatever
/// `index-type` the frontmatter already stores - a stale stored value has
/// previously produced wrong hierarchy levels downstream, so it is treated
/// as a hint at best.
pub fn derive_index_type(classification: &Classification) -> IndexType {
    if !classification.is_index_file {
        return IndexType::None;
    }
    IndexType::for_index_depth(classification.depth)
}

/// The deepest hierarchy field level applicable to this note.
///
/// Index files are bounded by their type's table (main=0 .. module=4).
/// Content files may carry fields up to the depth of their innermost
/// folder, capped at module level.
pub fn effective_max_level(classification: &Classification, index_type: IndexType) -> usize {
    index_type
        .max_level()
        .unwrap_or_else(|| classification.depth.min(MAX_HIERARCHY_DEPTH))
}

/// Canonical `field -> value` pairs for levels `1..=max_level`, in level
/// order. The value at level L is the folder name at that depth exactly as
/// it appears on disk - these are display-facing names, so no case or
/// punctuation normalization is applied.
pub fn resolve_canonical_values(
    classification: &Classification,
    index_type: IndexType,
) -> Vec<(&'static str, String)> {
    let max_level = effective_max_level(classification, index_type);
    HIERARCHY_FIELDS
        .iter()
        .take(max_level)
        .enumerate()
        .map(|(index, &field)| (field, classification.segments[index].clone()))
        .collect()
}

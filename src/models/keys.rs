/// Canonical frontmatter key names used across vault notes.
///
/// Using these constants ensures consistency between reconciliation and
/// reporting. Always use these constants instead of string literals for
/// frontmatter keys.
pub mod frontmatter {
    // Hierarchy fields, one per taxonomy level
    pub const PROGRAM: &str = "program";
    pub const COURSE: &str = "course";
    pub const CLASS: &str = "class";
    pub const MODULE: &str = "module";

    // Index files carry their derived type under this key
    pub const INDEX_TYPE: &str = "index-type";
}

/// Hierarchy fields in level order: level 1 = `program` .. level 4 = `module`.
pub const HIERARCHY_FIELDS: [&str; 4] = [
    frontmatter::PROGRAM,
    frontmatter::COURSE,
    frontmatter::CLASS,
    frontmatter::MODULE,
];

/// The hierarchy field applicable at a 1-based level, if any.
pub fn field_at_level(level: usize) -> Option<&'static str> {
    if level == 0 {
        return None;
    }
    HIERARCHY_FIELDS.get(level - 1).copied()
}

/// The 1-based level of a hierarchy field, or `None` for any other key.
pub fn level_of_field(field: &str) -> Option<usize> {
    HIERARCHY_FIELDS
        .iter()
        .position(|&name| name == field)
        .map(|index| index + 1)
}

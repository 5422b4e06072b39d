use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a note within the four-level vault taxonomy.
///
/// Index files (named after their containing folder) are typed by the depth
/// of that folder; every other note is a content file and carries no
/// index-type at all. The type is re-derived from the path on every
/// reconciliation pass - a stored `index-type` value is never authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexType {
    /// Content file; never carries an `index-type` key.
    None,
    /// The vault's root landing page.
    Main,
    /// Program index, one folder below the vault root.
    Program,
    /// Course index, two folders down.
    Course,
    /// Class index, three folders down.
    Class,
    /// Module index, four or more folders down.
    Module,
}

impl IndexType {
    /// Index-type for an index file at the given folder depth.
    ///
    /// Folders can nest deeper than four levels, but module is the deepest
    /// recognized hierarchy level; anything below it is content within a
    /// module.
    pub fn for_index_depth(depth: usize) -> Self {
        match depth {
            0 => Self::Main,
            1 => Self::Program,
            2 => Self::Course,
            3 => Self::Class,
            _ => Self::Module,
        }
    }

    /// The deepest hierarchy field level applicable to this index-type.
    ///
    /// Returns `None` for content files, whose effective level depends on
    /// their folder depth rather than on the type itself.
    pub fn max_level(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Main => Some(0),
            Self::Program => Some(1),
            Self::Course => Some(2),
            Self::Class => Some(3),
            Self::Module => Some(4),
        }
    }

    /// The frontmatter string for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Main => "main",
            Self::Program => "program",
            Self::Course => "course",
            Self::Class => "class",
            Self::Module => "module",
        }
    }

    pub fn is_index(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

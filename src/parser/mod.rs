pub mod frontmatter;

pub use frontmatter::{parse_note, render_note, NoteDocument};

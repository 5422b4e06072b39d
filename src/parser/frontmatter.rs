//! Splitting and reassembling Markdown notes with YAML frontmatter.
//!
//! A note is an optional `---`-delimited YAML header followed by the
//! Markdown body. The header is parsed into an insertion-ordered
//! `serde_yaml::Mapping` so that passthrough keys keep their relative
//! order across a rewrite. The body is carried as the exact byte range
//! after the closing delimiter and is never touched.

use anyhow::{bail, Context, Result};
use serde_yaml::{Mapping, Value};

/// One parsed note: frontmatter mapping plus untouched body text.
#[derive(Debug, Clone)]
pub struct NoteDocument {
    pub frontmatter: Mapping,
    pub body: String,
    /// Whether the source content carried a frontmatter block at all.
    pub had_frontmatter: bool,
}

/// Parse a note into frontmatter and body.
///
/// A note without a leading `---` line is valid: it has an empty mapping
/// and the whole content as body. A note that opens a frontmatter block
/// but never closes it, or whose header is not a YAML mapping, is an
/// error - the caller decides whether to skip the file.
pub fn parse_note(content: &str) -> Result<NoteDocument> {
    let mut lines = content.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok(NoteDocument {
            frontmatter: Mapping::new(),
            body: String::new(),
            had_frontmatter: false,
        });
    };

    if first.trim() != "---" {
        return Ok(NoteDocument {
            frontmatter: Mapping::new(),
            body: content.to_string(),
            had_frontmatter: false,
        });
    }

    // The closing delimiter must sit at the same indentation as the opening
    // one, so an embedded `---` inside an indented block scalar does not
    // terminate the header early.
    let opening_indent = first.len() - first.trim_start().len();

    let yaml_start = first.len();
    let mut offset = yaml_start;
    let mut yaml_end = None;
    let mut body_start = content.len();

    for line in lines {
        if line.trim() == "---" {
            let line_indent = line.len() - line.trim_start().len();
            if line_indent == opening_indent {
                yaml_end = Some(offset);
                body_start = offset + line.len();
                break;
            }
        }
        offset += line.len();
    }

    let Some(yaml_end) = yaml_end else {
        bail!("Frontmatter block is not closed with ---");
    };

    let yaml_text = &content[yaml_start..yaml_end];
    let frontmatter = if yaml_text.trim().is_empty() {
        Mapping::new()
    } else {
        match serde_yaml::from_str::<Value>(yaml_text)
            .context("Failed to parse YAML frontmatter")?
        {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            other => bail!("Frontmatter is not a mapping (found {})", value_kind(&other)),
        }
    };

    Ok(NoteDocument {
        frontmatter,
        body: content[body_start..].to_string(),
        had_frontmatter: true,
    })
}

/// Reassemble a note from an updated mapping and the original body.
///
/// An empty mapping produces no frontmatter block at all.
pub fn render_note(frontmatter: &Mapping, body: &str) -> Result<String> {
    if frontmatter.is_empty() {
        return Ok(body.to_string());
    }
    let yaml =
        serde_yaml::to_string(frontmatter).context("Failed to serialize frontmatter to YAML")?;
    Ok(format!("---\n{yaml}---\n{body}"))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

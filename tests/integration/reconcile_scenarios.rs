//! Reconciliation scenarios exercised through the pure library API,
//! with no filesystem involved.

use lectern::hierarchy::{reconcile_frontmatter, ChangeKind};
use lectern::models::IndexType;
use serde_yaml::{Mapping, Value};
use std::path::Path;

fn mapping(pairs: &[(&str, &str)]) -> Mapping {
    let mut mapping = Mapping::new();
    for (key, value) in pairs {
        mapping.insert(Value::from(*key), Value::from(*value));
    }
    mapping
}

fn field<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a str> {
    mapping.get(key).and_then(Value::as_str)
}

#[test]
fn program_index_with_wrong_course_and_index_type() {
    let existing = mapping(&[("course", "SomeValue"), ("index-type", "course")]);
    let (index_type, result) = reconcile_frontmatter(
        Path::new("/Vault/MBA"),
        Path::new("/Vault/MBA/Program/Program.md"),
        &existing,
    )
    .unwrap();

    assert_eq!(index_type, IndexType::Program);
    assert_eq!(field(&result.frontmatter, "program"), Some("Program"));
    assert_eq!(field(&result.frontmatter, "index-type"), Some("program"));
    assert!(result.frontmatter.get("course").is_none());

    assert!(result
        .changes
        .iter()
        .any(|change| change.field == "course" && change.kind == ChangeKind::Removed));
    assert!(result.changes.iter().any(|change| {
        change.field == "index-type"
            && change.kind == ChangeKind::Corrected
            && change.old.as_deref() == Some("course")
            && change.new.as_deref() == Some("program")
    }));
}

#[test]
fn main_index_strips_every_hierarchy_field() {
    let existing = mapping(&[
        ("course", "MBA.md"),
        ("program", "x"),
        ("class", "y"),
        ("module", "z"),
    ]);
    let (index_type, result) = reconcile_frontmatter(
        Path::new("/Vault"),
        Path::new("/Vault/index.md"),
        &existing,
    )
    .unwrap();

    assert_eq!(index_type, IndexType::Main);
    for key in ["program", "course", "class", "module"] {
        assert!(
            result.frontmatter.get(key).is_none(),
            "{key} should be stripped from a main index"
        );
    }
    assert_eq!(
        result
            .changes
            .iter()
            .filter(|change| change.kind == ChangeKind::Removed)
            .count(),
        4
    );
}

#[test]
fn module_level_content_gains_all_four_fields_and_no_index_type() {
    let (index_type, result) = reconcile_frontmatter(
        Path::new("/Vault/MBA"),
        Path::new("/Vault/MBA/Prog/Course/Class/Module1/note.md"),
        &Mapping::new(),
    )
    .unwrap();

    assert_eq!(index_type, IndexType::None);
    assert_eq!(field(&result.frontmatter, "program"), Some("Prog"));
    assert_eq!(field(&result.frontmatter, "course"), Some("Course"));
    assert_eq!(field(&result.frontmatter, "class"), Some("Class"));
    assert_eq!(field(&result.frontmatter, "module"), Some("Module1"));
    assert!(result.frontmatter.get("index-type").is_none());
}

#[test]
fn class_level_case_study_has_no_module_field() {
    let existing = mapping(&[("title", "Acme buyout")]);
    let (index_type, result) = reconcile_frontmatter(
        Path::new("/Vault/MBA"),
        Path::new("/Vault/MBA/Prog/Course/Class/case-study.md"),
        &existing,
    )
    .unwrap();

    assert_eq!(index_type, IndexType::None);
    assert_eq!(field(&result.frontmatter, "program"), Some("Prog"));
    assert_eq!(field(&result.frontmatter, "course"), Some("Course"));
    assert_eq!(field(&result.frontmatter, "class"), Some("Class"));
    assert!(result.frontmatter.get("module").is_none());
    assert_eq!(field(&result.frontmatter, "title"), Some("Acme buyout"));
}

#[test]
fn second_pass_over_own_output_changes_nothing() {
    let existing = mapping(&[("course", "SomeValue"), ("index-type", "course")]);
    let root = Path::new("/Vault/MBA");
    let file = Path::new("/Vault/MBA/Program/Program.md");

    let (_, first) = reconcile_frontmatter(root, file, &existing).unwrap();
    assert!(first.is_changed());

    let (_, second) = reconcile_frontmatter(root, file, &first.frontmatter).unwrap();
    assert!(
        second.changes.is_empty(),
        "second pass should be a no-op, got {:?}",
        second.changes
    );
    assert_eq!(second.frontmatter, first.frontmatter);
}

#[test]
fn out_of_vault_file_is_rejected() {
    let result = reconcile_frontmatter(
        Path::new("/Vault"),
        Path::new("/Elsewhere/note.md"),
        &Mapping::new(),
    );
    assert!(result.is_err());
}

//! End-to-end scan/fix pipeline tests over a vault on disk.

use glob::Pattern;
use lectern::fs::Vault;
use lectern::models::{RunMode, RunReport};
use lectern::pipeline::process_vault;
use serde_yaml::Value;
use std::fs;

use crate::helpers::{build_course_vault, field, frontmatter_of, write_note};

fn run(vault_root: &std::path::Path, mode: RunMode) -> RunReport {
    let vault = Vault::open(vault_root).expect("Failed to open vault");
    process_vault(&vault, None, mode, None).expect("Pipeline run failed")
}

#[test]
fn scan_leaves_the_vault_untouched() {
    let temp = build_course_vault();
    let before = fs::read_to_string(temp.path().join("index.md")).unwrap();

    let report = run(temp.path(), RunMode::Scan);
    assert!(report.files_changed() > 0);
    assert!(report.notes.iter().all(|note| !note.wrote));

    let after = fs::read_to_string(temp.path().join("index.md")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn fix_reconciles_every_level_of_the_fixture() {
    let temp = build_course_vault();
    let report = run(temp.path(), RunMode::Fix);
    assert_eq!(report.files_errored(), 0);

    // Main index: stale hierarchy fields stripped, typed as main.
    let main = frontmatter_of(temp.path(), "index.md");
    assert!(main.get("program").is_none());
    assert!(main.get("course").is_none());
    assert_eq!(field(&main, "index-type"), Some("main"));

    // Program index gained its frontmatter block from nothing.
    let program = frontmatter_of(temp.path(), "MBA/MBA.md");
    assert_eq!(field(&program, "program"), Some("MBA"));
    assert_eq!(field(&program, "index-type"), Some("program"));

    // Course index: wrong value and wrong stored type both corrected.
    let course = frontmatter_of(temp.path(), "MBA/Finance/Finance.md");
    assert_eq!(field(&course, "program"), Some("MBA"));
    assert_eq!(field(&course, "course"), Some("Finance"));
    assert_eq!(field(&course, "index-type"), Some("course"));

    // Class index: stored "course" type overridden by path-derived class.
    let class = frontmatter_of(
        temp.path(),
        "MBA/Finance/Corporate Finance/Corporate Finance.md",
    );
    assert_eq!(field(&class, "class"), Some("Corporate Finance"));
    assert_eq!(field(&class, "index-type"), Some("class"));
    assert!(class.get("module").is_none());

    // Case study directly under the class folder: module stays absent.
    let case_study = frontmatter_of(temp.path(), "MBA/Finance/Corporate Finance/case-study.md");
    assert_eq!(field(&case_study, "class"), Some("Corporate Finance"));
    assert!(case_study.get("module").is_none());
    assert!(case_study.get("index-type").is_none());
    assert_eq!(field(&case_study, "title"), Some("Acme buyout"));

    // Module-level content: all four fields, no index-type, passthrough kept.
    let notes = frontmatter_of(
        temp.path(),
        "MBA/Finance/Corporate Finance/Module 1/notes.md",
    );
    assert_eq!(field(&notes, "module"), Some("Module 1"));
    assert!(notes.get("index-type").is_none());
    assert_eq!(field(&notes, "title"), Some("Week 3 notes"));
    assert_eq!(
        notes.get("tags"),
        Some(&Value::from(vec!["finance", "dcf"]))
    );

    // Content below module level still resolves to the module's fields.
    let transcript = frontmatter_of(
        temp.path(),
        "MBA/Finance/Corporate Finance/Module 1/Lesson A/transcript.md",
    );
    assert_eq!(field(&transcript, "module"), Some("Module 1"));
    assert!(transcript.get("index-type").is_none());
}

#[test]
fn fix_preserves_note_bodies_exactly() {
    let temp = build_course_vault();
    run(temp.path(), RunMode::Fix);

    let case_study =
        fs::read_to_string(temp.path().join("MBA/Finance/Corporate Finance/case-study.md"))
            .unwrap();
    assert!(case_study.ends_with("Case study body\n"));

    let transcript = fs::read_to_string(
        temp.path()
            .join("MBA/Finance/Corporate Finance/Module 1/Lesson A/transcript.md"),
    )
    .unwrap();
    assert!(transcript.ends_with("Transcript body only\n"));
}

#[test]
fn fix_is_idempotent_across_the_whole_vault() {
    let temp = build_course_vault();

    let first = run(temp.path(), RunMode::Fix);
    assert!(first.files_changed() > 0);

    let second = run(temp.path(), RunMode::Fix);
    assert!(
        second.is_clean(),
        "second run should find nothing to do, got {} changes",
        second.total_changes()
    );
}

#[test]
fn unparseable_note_is_skipped_not_fatal() {
    let temp = build_course_vault();
    write_note(temp.path(), "MBA/broken.md", "---\nnever: closed\n");

    let report = run(temp.path(), RunMode::Fix);
    assert_eq!(report.files_errored(), 1);

    let failed = report
        .notes
        .iter()
        .find(|note| note.error.is_some())
        .unwrap();
    assert!(failed.path.ends_with("broken.md"));

    // Everyone else still got reconciled.
    let program = frontmatter_of(temp.path(), "MBA/MBA.md");
    assert_eq!(field(&program, "program"), Some("MBA"));
}

#[test]
fn match_filter_limits_the_run() {
    let temp = build_course_vault();
    let vault = Vault::open(temp.path()).unwrap();
    let pattern = Pattern::new("MBA/Finance/**/*.md").unwrap();

    let report = process_vault(&vault, Some(&pattern), RunMode::Fix, None).unwrap();
    assert!(report
        .notes
        .iter()
        .all(|note| note.path.starts_with("MBA/Finance/")));

    // The root index was filtered out and stays stale.
    let main = frontmatter_of(temp.path(), "index.md");
    assert_eq!(field(&main, "program"), Some("stale"));
}

#[test]
fn report_serializes_with_outcomes() {
    let temp = build_course_vault();
    let report = run(temp.path(), RunMode::Scan);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"mode\":\"scan\""));
    assert!(json.contains("index.md"));
    assert!(json.contains("\"kind\":\"removed\""));
}

//! Vault root resolution precedence tests.
//!
//! These mutate the process environment, so they are serialized.

use lectern::config::{resolve_vault_root, VAULT_ENV};
use serial_test::serial;
use std::path::PathBuf;

#[test]
#[serial]
fn flag_beats_environment() {
    std::env::set_var(VAULT_ENV, "/from-env");
    let resolved = resolve_vault_root(Some(PathBuf::from("/from-flag"))).unwrap();
    std::env::remove_var(VAULT_ENV);

    assert_eq!(resolved, PathBuf::from("/from-flag"));
}

#[test]
#[serial]
fn environment_is_used_when_no_flag_is_given() {
    std::env::set_var(VAULT_ENV, "/from-env");
    let resolved = resolve_vault_root(None).unwrap();
    std::env::remove_var(VAULT_ENV);

    assert_eq!(resolved, PathBuf::from("/from-env"));
}

#[test]
#[serial]
fn empty_environment_value_is_ignored() {
    std::env::set_var(VAULT_ENV, "");
    let resolved = resolve_vault_root(Some(PathBuf::from("/fallback"))).unwrap();
    std::env::remove_var(VAULT_ENV);

    assert_eq!(resolved, PathBuf::from("/fallback"));
}

use std::path::Path;

use fractura::{parse_mode, resolve_root};
use fractura_core::runner::Mode;
use tempfile::tempdir;

#[test]
fn resolve_root_canonicalizes_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let resolved = resolve_root(tmp.path().to_str().expect("utf8 path")).expect("resolve");
    assert_eq!(resolved, tmp.path().canonicalize().expect("canonicalize tmp"));
}

#[test]
fn resolve_root_joins_missing_path_onto_cwd() {
    let resolved = resolve_root("does-not-exist-yet").expect("resolve");
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(resolved, cwd.join(Path::new("does-not-exist-yet")));
}

#[test]
fn parse_mode_accepts_all_known_modes() {
    assert_eq!(parse_mode("all").expect("all"), Mode::All);
    assert_eq!(parse_mode("symbols").expect("symbols"), Mode::Symbols);
    assert_eq!(parse_mode("mantras").expect("mantras"), Mode::Mantras);
    assert_eq!(parse_mode("chant").expect("chant"), Mode::Chant);
}

#[test]
fn parse_mode_accepts_ritual_alias() {
    assert_eq!(parse_mode("ritual").expect("ritual"), Mode::All);
}

#[test]
fn parse_mode_rejects_unknown_mode_with_usage_hint() {
    let err = parse_mode("bogus").expect_err("bogus should fail");
    let message = err.to_string();
    assert!(message.contains("Unknown mode 'bogus'"), "message was: {message}");
    assert!(message.contains("symbols, mantras, chant, all"));
}

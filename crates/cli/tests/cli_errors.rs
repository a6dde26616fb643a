use fractura_core::layout::RitualLayout;
use predicates::str::contains;
use tempfile::tempdir;

/// An unrecognized mode fails with a usage message and writes nothing.
#[test]
fn unknown_mode_fails_with_usage_message() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("fractura.json"),
        r#"{"symbolic_analysis": {}, "narrative_structures": {}}"#,
    )
    .expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("fractura")
        .arg("bogus")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("Unknown mode 'bogus'"))
        .stderr(contains("symbols, mantras, chant, all"));

    let layout = RitualLayout::new(dir.path());
    assert!(!layout.outputs_dir.exists(), "no artifacts on a usage error");
}

/// A missing config fails the run with a non-zero exit and no artifacts.
#[test]
fn missing_config_fails_without_writing() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("fractura")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("Failed to prepare ritual"));

    let layout = RitualLayout::new(dir.path());
    assert!(!layout.outputs_dir.exists());
}

/// Malformed config JSON is a config error, not a panic.
#[test]
fn malformed_config_fails_cleanly() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("fractura.json"), "{ not json").expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("fractura")
        .arg("--root")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("Invalid config JSON"));
}

/// A `--config` override pointing at a missing file fails cleanly.
#[test]
fn missing_config_override_fails() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("fractura")
        .arg("--root")
        .arg(dir.path())
        .arg("--config")
        .arg("absent.json")
        .assert()
        .failure()
        .stderr(contains("absent.json"));
}

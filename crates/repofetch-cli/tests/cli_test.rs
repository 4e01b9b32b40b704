mod helpers;

#[test]
fn help_succeeds() {
    let cwd = tempfile::tempdir().unwrap();

    let output = helpers::run_bin(cwd.path(), &["--help"], &[]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--checkout"));
}

#[test]
fn missing_url_is_usage_error() {
    let cwd = tempfile::tempdir().unwrap();

    let output = helpers::run_bin(cwd.path(), &[], &[]);

    assert!(!output.status.success());
}

#[test]
fn missing_vcs_exits_with_one() {
    let cwd = tempfile::tempdir().unwrap();

    let output = helpers::run_bin(
        cwd.path(),
        &["https://example.com/foo/bar.git"],
        &[("REPOFETCH_PROGRAM", "repofetch-no-such-vcs-7f3a")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not installed"));
    assert!(output.stdout.is_empty());
}

#[test]
fn settings_file_in_working_directory_is_read() {
    let cwd = tempfile::tempdir().unwrap();
    std::fs::write(
        cwd.path().join("repofetch.toml"),
        "program = \"repofetch-no-such-vcs-7f3a\"\n",
    )
    .unwrap();

    let output = helpers::run_bin(cwd.path(), &["https://example.com/foo/bar.git"], &[]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn json_output() {
    if !helpers::git_available() {
        return;
    }

    let cwd = tempfile::tempdir().unwrap();
    let source = helpers::init_source_repo(cwd.path(), "gadgets");
    let parent = tempfile::tempdir().unwrap();

    let output = helpers::run_bin(
        cwd.path(),
        &[
            source.to_str().unwrap(),
            "--checkout",
            "v1.0",
            "--temp-parent",
            parent.path().to_str().unwrap(),
            "--json",
        ],
        &[],
    );

    assert!(output.status.success(), "{:?}", output);
    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["checkout"], "v1.0");
    assert_eq!(outcome["kept"], true);

    let path = outcome["path"].as_str().unwrap();
    assert!(path.ends_with("gadgets"));
    assert!(std::path::Path::new(path).join("README.md").exists());
}

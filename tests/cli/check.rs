use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{APP_SOURCE, CliTest, run, stderr, stdout};

fn setup_app(test: &CliTest) -> Result<()> {
    test.write_file("src/App.jsx", APP_SOURCE)
}

#[test]
fn test_missing_keys_in_target() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", APP_SOURCE)?;
    test.write_file(
        "src/locales/en-US.json",
        r#"{"a": {"b": "Hi", "c": "Cancel", "d": "Done"}}"#,
    )?;
    test.write_file("src/locales/zh-CN.json", r#"{"a": {"b": "你好"}}"#)?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----
    ✘ Missing 2 keys in zh-CN.json:
      a.c
      a.d
    ✘ Found 2 missing keys in 1 locale file

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_all_keys_present() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    test.write_file(
        "src/locales/en-US.json",
        r#"{"a": {"b": "Hi", "c": "Cancel", "d": "Done"}}"#,
    )?;
    test.write_file(
        "src/locales/zh-CN.json",
        r#"{"a": {"b": "你好", "c": "取消", "d": "完成"}}"#,
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No missing keys in zh-CN.json
    ✓ Checked 1 source file, 1 locale file - no missing keys

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_target_file_reports_every_key() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    test.write_file(
        "src/locales/en-US.json",
        r#"{"a": {"b": "Hi", "c": "Cancel", "d": "Done"}}"#,
    )?;

    let output = run(test.command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("✘ Missing 3 keys in zh-CN.json:\n  a.b\n  a.c\n  a.d\n"));
    assert_eq!(stderr(&output), "");
    Ok(())
}

#[test]
fn test_invalid_locale_json_warns_and_continues() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    test.write_file(
        "src/locales/en-US.json",
        r#"{"a": {"b": "Hi", "c": "Cancel", "d": "Done"}}"#,
    )?;
    test.write_file("src/locales/zh-CN.json", "{ \"a\": ")?;

    let output = run(test.command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).starts_with("warning: Failed to parse JSON: src/locales/zh-CN.json ("),
        "unexpected stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("Missing 3 keys in zh-CN.json:"));
    Ok(())
}

#[test]
fn test_incomplete_base_does_not_fail_check() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", "intl.get('a.b')")?;
    test.write_file("src/locales/en-US.json", "{}")?;
    test.write_file("src/locales/zh-CN.json", r#"{"a": {"b": "x"}}"#)?;

    let output = run(test.command())?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ No missing keys in zh-CN.json\n\
         ✓ Checked 1 source file, 1 locale file - no missing keys\n"
    );
    Ok(())
}

#[test]
fn test_invalid_base_json_still_warns() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", "intl.get('k')")?;
    test.write_file("src/locales/en-US.json", "{ broken")?;
    test.write_file("src/locales/zh-CN.json", r#"{"k": "v"}"#)?;

    let output = run(test.command())?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).starts_with("warning: Failed to parse JSON: src/locales/en-US.json ("));
    Ok(())
}

#[test]
fn test_no_keys_found() -> Result<()> {
    let test = CliTest::with_file("src/index.js", "console.log('hello');")?;

    let output = run(test.command())?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stderr(&output), "warning: No i18n keys found in source.\n");
    assert!(stdout(&output).contains("no missing keys"));
    Ok(())
}

#[test]
fn test_quiet_clean_run_prints_nothing() -> Result<()> {
    let test = CliTest::with_file("src/index.js", "console.log('hello');")?;

    let mut cmd = test.command();
    cmd.arg("--quiet");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "");
    Ok(())
}

#[test]
fn test_quiet_still_lists_missing_keys() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", "intl.get('only.key')")?;
    test.write_file("src/locales/en-US.json", r#"{"only": {"key": "x"}}"#)?;

    let mut cmd = test.command();
    cmd.arg("--quiet");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "✘ Missing 1 key in zh-CN.json:\n  only.key\n"
    );
    Ok(())
}

#[test]
fn test_custom_paths_and_multiple_targets() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/page.tsx", "intl.get('title')")?;
    test.write_file("app/ignored.md", "intl.get('not.a.source')")?;
    test.write_file("i18n/en.json", r#"{"title": "Title"}"#)?;
    test.write_file("i18n/fr.json", r#"{"title": "Titre"}"#)?;

    let mut cmd = test.command();
    cmd.args(["-s", "app/**/*.tsx", "-l", "i18n", "-b", "en.json"]);
    cmd.args(["-t", "fr.json, de.json"]);
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout(&output),
        "✓ No missing keys in fr.json\n\
         ✘ Missing 1 key in de.json:\n  title\n\
         ✘ Found 1 missing key in 1 locale file\n"
    );
    Ok(())
}

#[test]
fn test_verbose_reports_scan_statistics() -> Result<()> {
    let test = CliTest::new()?;
    setup_app(&test)?;
    std::fs::write(test.root().join("src/broken.js"), [0xff, 0xfe, 0xfd])?;

    let mut cmd = test.command();
    cmd.arg("-v");
    let output = run(cmd)?;

    let stderr = stderr(&output);
    assert!(stderr.contains("Note: No .i18ncheckrc.json found, using default configuration"));
    assert!(stderr.contains("warning: Skipped unreadable file"));
    assert!(stderr.contains("src/broken.js"));
    assert!(stderr.contains("Found 3 i18n keys in 1 source file\n"));
    Ok(())
}

#[test]
fn test_invalid_source_glob_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["--source", "src/**/[.js"]);
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: Invalid glob pattern in 'source'"));
    Ok(())
}

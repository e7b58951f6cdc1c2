use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{APP_SOURCE, CliTest, run, stderr, stdout};

#[test]
fn test_extract_fills_missing_keys() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", APP_SOURCE)?;
    test.write_file("src/locales/en-US.json", r#"{"a": {"b": "Hi"}}"#)?;
    test.write_file("src/locales/zh-CN.json", r#"{"a": {"b": "你好"}}"#)?;

    assert_cmd_snapshot!(test.extract_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Updated src/locales/en-US.json with 2 new keys
    ✓ Updated src/locales/zh-CN.json with 2 new keys

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("src/locales/zh-CN.json")?,
        r#"{
  "a": {
    "b": "你好",
    "c": "TODO: a.c",
    "d": "TODO: a.d"
  }
}
"#
    );
    Ok(())
}

#[test]
fn test_extract_creates_missing_locale_files() -> Result<()> {
    let test = CliTest::with_file("src/App.tsx", "intl.get('a.b')")?;

    let output = run(test.extract_command())?;

    assert_eq!(output.status.code(), Some(0));
    let expected = "{\n  \"a\": {\n    \"b\": \"TODO: a.b\"\n  }\n}\n";
    assert_eq!(test.read_file("src/locales/en-US.json")?, expected);
    assert_eq!(test.read_file("src/locales/zh-CN.json")?, expected);
    Ok(())
}

#[test]
fn test_extract_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", APP_SOURCE)?;
    test.write_file("src/locales/zh-CN.json", r#"{"z": "keep", "a": "leaf"}"#)?;

    run(test.extract_command())?;
    let first = test.read_file("src/locales/zh-CN.json")?;
    let output = run(test.extract_command())?;
    let second = test.read_file("src/locales/zh-CN.json")?;

    assert_eq!(first, second);
    assert!(stdout(&output).contains("Updated src/locales/zh-CN.json with 0 new keys"));
    Ok(())
}

#[test]
fn test_extract_replaces_leaf_in_the_way() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", "intl.get('a.b')")?;
    test.write_file("src/locales/zh-CN.json", r#"{"a": "was a leaf", "z": "kept"}"#)?;

    run(test.extract_command())?;

    assert_eq!(
        test.read_file("src/locales/zh-CN.json")?,
        "{\n  \"a\": {\n    \"b\": \"TODO: a.b\"\n  },\n  \"z\": \"kept\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_extract_then_check_passes() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", APP_SOURCE)?;

    run(test.extract_command())?;
    let mut cmd = test.command();
    cmd.arg("--quiet");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
    Ok(())
}

#[test]
fn test_extract_over_invalid_json_rewrites_file() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", "intl.get('k')")?;
    test.write_file("src/locales/zh-CN.json", "not json at all")?;

    let output = run(test.extract_command())?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).starts_with("warning: Failed to parse JSON: src/locales/zh-CN.json"));
    assert_eq!(
        test.read_file("src/locales/zh-CN.json")?,
        "{\n  \"k\": \"TODO: k\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_extract_write_failure_is_an_error() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", "intl.get('k')")?;
    std::fs::create_dir_all(test.root().join("src/locales/zh-CN.json"))?;

    let mut cmd = test.extract_command();
    cmd.arg("--quiet");
    let output = run(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("Error: Failed to write file: src/locales/zh-CN.json"),
        "unexpected stderr: {}",
        stderr(&output)
    );
    Ok(())
}

use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["translationsRoot"], "./messages");
    assert_eq!(parsed["mode"], "auto");
    assert_eq!(parsed["emptyValues"], "missing");
    assert_eq!(
        parsed["checks"],
        serde_json::json!(["missing-nested-keys", "missing-translation", "missing-parent"])
    );

    // Verify formatting (2-space indentation)
    assert!(
        content.contains("\n  \"translationsRoot\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\u{2713} Created .locdiffrc.json\n");
    assert!(test.root().join(".locdiffrc.json").exists());

    let content = test.read_file(".locdiffrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".locdiffrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains(".locdiffrc.json already exists"));
    assert_eq!(test.read_file(".locdiffrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_loadable() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages/en.json", r#"{"a": "A"}"#),
        ("messages/de.json", r#"{"a": "A"}"#),
    ])?;

    let mut cmd = test.command();
    cmd.arg("init");
    run(cmd)?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    Ok(())
}

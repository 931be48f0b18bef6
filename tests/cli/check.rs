use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, DE_JSON, EN_JSON, run};

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages/en.json", r#"{"greeting": "Hello"}"#),
        ("messages/de.json", r#"{"greeting": "Hallo"}"#),
    ])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 2 translation files - no issues found\n"
    );
    assert_eq!(output.stderr, "");
    Ok(())
}

#[test]
fn test_missing_translation() -> Result<()> {
    let test = CliTest::with_missing_translation()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        [
            "warning: Missing translations for \"nested.message\" in: de  missing-translation",
            "  --> messages/en.json:4:6",
            "  |",
            "4 |     \"message\": \"Hi\"",
            "  |      ^^^^^^^",
            "",
            "\u{2718} 1 problem (1 warning) in 1 file",
            "",
        ]
        .join("\n")
    );
    Ok(())
}

#[test]
fn test_missing_nested_keys() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "messages/en.json",
            "{\n  \"form\": {\n    \"name\": \"Name\"\n  }\n}\n",
        ),
        (
            "messages/de.json",
            "{\n  \"form\": {\n    \"name\": \"Name\",\n    \"email\": \"E-Mail\"\n  }\n}\n",
        ),
    ])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    // In de.json, "email" exists only on the de side.
    assert!(
        output
            .stdout
            .contains("warning: Missing translations for \"form.email\" in: en  missing-translation")
    );
    assert!(output.stdout.contains("--> messages/de.json:4:6"));
    // In en.json, the "form" namespace lacks a key de has.
    assert!(output.stdout.contains(
        "warning: Namespace \"form\" is missing keys found in other locales: de: form.email  missing-nested-keys"
    ));
    assert!(output.stdout.contains("--> messages/en.json:2:4"));
    assert!(output.stdout.contains("2 problems (2 warnings) in 2 files"));
    Ok(())
}

#[test]
fn test_folder_layout_compares_same_namespace_only() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages/en/common.json", r#"{"save": "Save"}"#),
        ("messages/en/errors.json", r#"{"notFound": "Not found"}"#),
        (
            "messages/de/common.json",
            r#"{"save": "Speichern", "cancel": "Abbrechen"}"#,
        ),
    ])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("Missing translations for \"cancel\" in: en")
    );
    assert!(output.stdout.contains("--> messages/de/common.json:1:24"));
    assert!(!output.stdout.contains("errors.json"));
    assert!(output.stdout.contains("1 problem (1 warning) in 1 file"));
    Ok(())
}

#[test]
fn test_check_given_files_only() -> Result<()> {
    let test = CliTest::with_missing_translation()?;

    let mut cmd = test.check_command();
    cmd.arg("messages/de.json");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 1 translation file - no issues found\n"
    );

    let mut cmd = test.check_command();
    cmd.arg("messages/en.json");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(1));
    Ok(())
}

#[test]
fn test_not_a_translation_document() -> Result<()> {
    let test = CliTest::with_missing_translation()?;
    test.write_file("src/data.json", "{}")?;

    let mut cmd = test.check_command();
    cmd.arg("src/data.json");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stderr
            .contains("warning: src/data.json is not a translation document")
    );
    Ok(())
}

#[test]
fn test_missing_translations_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Translations root not found"));
    Ok(())
}

#[test]
fn test_malformed_locale_is_skipped() -> Result<()> {
    let test = CliTest::with_missing_translation()?;
    test.write_file("messages/fr.json", r#"{"greeting": ["Bonjour"]}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_eq!(output.stderr.matches("(locale fr skipped)").count(), 1);
    assert!(output.stderr.contains("malformed translation tree"));
    assert!(output.stdout.contains("in: de"));
    Ok(())
}

#[test]
fn test_config_translations_root_and_ignores() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".locdiffrc.json",
            r#"{
  "translationsRoot": "./locales",
  "ignores": ["locales/*/drafts/**"]
}"#,
        ),
        ("locales/en/common.json", r#"{"save": "Save"}"#),
        ("locales/de/common.json", r#"{"save": "Speichern"}"#),
        ("locales/en/drafts/new.json", r#"{"beta": "Beta"}"#),
    ])?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Checked 2 translation files - no issues found\n"
    );
    Ok(())
}

#[test]
fn test_translations_root_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_files(&[
        (".locdiffrc.json", r#"{"translationsRoot": "./missing"}"#),
        ("i18n/en.json", EN_JSON),
        ("i18n/de.json", DE_JSON),
    ])?;

    let mut cmd = test.check_command();
    cmd.args(["--translations-root", "i18n"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("--> i18n/en.json:4:6"));
    Ok(())
}

#[test]
fn test_empty_values_policy() -> Result<()> {
    let test = CliTest::with_files(&[
        ("messages/en.json", r#"{"title": "Title"}"#),
        ("messages/de.json", r#"{"title": ""}"#),
    ])?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("Missing translations for \"title\" in: de"));

    test.write_file(".locdiffrc.json", r#"{"emptyValues": "present"}"#)?;
    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    for command in ["check", "hover", "watch", "init", "serve"] {
        assert!(output.stdout.contains(command), "missing {command} in help");
    }
    Ok(())
}

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_hover_on_annotated_key() -> Result<()> {
    let test = CliTest::with_missing_translation()?;

    let output = run(test.hover_command("messages/en.json", 4, 6))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        [
            "nested.message  \"Hi\"",
            "  --> messages/en.json:4:6",
            "  = Missing translations for \"nested.message\" in: de",
            "",
        ]
        .join("\n")
    );
    Ok(())
}

#[test]
fn test_hover_anywhere_on_key_token() -> Result<()> {
    let test = CliTest::with_missing_translation()?;

    // Last character of `message`.
    let output = run(test.hover_command("messages/en.json", 4, 12))?;
    assert!(output.stdout.starts_with("nested.message"));

    // Past the key token.
    let output = run(test.hover_command("messages/en.json", 4, 14))?;
    assert_eq!(output.stdout, "No warnings at messages/en.json:4:14\n");
    Ok(())
}

#[test]
fn test_hover_without_warning() -> Result<()> {
    let test = CliTest::with_missing_translation()?;

    let output = run(test.hover_command("messages/en.json", 2, 4))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "No warnings at messages/en.json:2:4\n");
    Ok(())
}

#[test]
fn test_hover_not_a_translation_document() -> Result<()> {
    let test = CliTest::with_missing_translation()?;
    test.write_file("package.json", "{}")?;

    let output = run(test.hover_command("package.json", 1, 1))?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .contains("package.json is not a translation document")
    );
    Ok(())
}

#[test]
fn test_hover_malformed_document() -> Result<()> {
    let test = CliTest::with_missing_translation()?;
    test.write_file("messages/fr.json", "{ \"greeting\": ")?;

    let output = run(test.hover_command("messages/fr.json", 1, 4))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Cannot check messages/fr.json"));
    Ok(())
}

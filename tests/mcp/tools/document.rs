use locdiff::mcp::{
    LocdiffMcpServer,
    types::{CheckAllParams, CheckDocumentParams, CloseDocumentParams, HoverParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};

use crate::{
    McpTestFixture, annotation_messages, extract_tool_result_json,
    fixture_with_missing_translation,
};

async fn check_document(
    server: &LocdiffMcpServer,
    fixture: &McpTestFixture,
    file_path: &str,
    text: Option<&str>,
) -> Value {
    let params = Parameters(CheckDocumentParams {
        project_root_path: fixture.root(),
        file_path: file_path.to_string(),
        text: text.map(str::to_string),
    });
    extract_tool_result_json(&server.check_document(params).await.unwrap())
}

async fn hover(
    server: &LocdiffMcpServer,
    fixture: &McpTestFixture,
    line: u32,
    character: u32,
) -> Value {
    let params = Parameters(HoverParams {
        project_root_path: fixture.root(),
        file_path: "messages/en.json".to_string(),
        line,
        character,
    });
    extract_tool_result_json(&server.hover(params).await.unwrap())["hover"].clone()
}

// ============================================================================
// check_document tests
// ============================================================================

#[tokio::test]
async fn test_check_document_reports_annotations() {
    let fixture = fixture_with_missing_translation().unwrap();
    let server = LocdiffMcpServer::new();

    let report = check_document(&server, &fixture, "messages/en.json", None).await;

    assert_eq!(report["locale"], "en");
    assert_eq!(report["locales"], json!(["de", "en"]));
    assert_eq!(report["skipped"], Value::Null);
    assert_eq!(
        annotation_messages(&report),
        vec![r#"Missing translations for "nested.message" in: de"#]
    );

    let annotation = &report["annotations"][0];
    assert_eq!(annotation["severity"], "warning");
    assert_eq!(annotation["source"], "locdiff");
    assert_eq!(annotation["rule"], "missing-translation");
    assert_eq!(annotation["key"], "nested.message");
    assert_eq!(
        annotation["range"],
        json!({
            "start": {"line": 3, "character": 5},
            "end": {"line": 3, "character": 12}
        })
    );
}

#[tokio::test]
async fn test_check_document_with_unsaved_text() {
    let fixture = fixture_with_missing_translation().unwrap();
    let server = LocdiffMcpServer::new();

    let text = "{\n  \"greeting\": \"Hallo\",\n  \"farewell\": \"Tschüss\"\n}\n";
    let report = check_document(&server, &fixture, "messages/de.json", Some(text)).await;

    assert_eq!(
        annotation_messages(&report),
        vec![r#"Missing translations for "farewell" in: en"#]
    );
    assert_eq!(report["annotations"][0]["range"]["start"]["line"], 2);
}

#[tokio::test]
async fn test_check_document_outside_translations_root() {
    let fixture = fixture_with_missing_translation().unwrap();
    let server = LocdiffMcpServer::new();

    let report = check_document(&server, &fixture, "package.json", Some("{}")).await;

    assert_eq!(report["skipped"], "not-a-translation-document");
    assert_eq!(report["annotations"], json!([]));
}

#[tokio::test]
async fn test_check_document_malformed_locale() {
    let fixture = fixture_with_missing_translation().unwrap();
    fixture
        .write_locale_file("fr", &json!({"greeting": ["Bonjour"]}))
        .unwrap();
    let server = LocdiffMcpServer::new();

    let report = check_document(&server, &fixture, "messages/en.json", None).await;

    assert_eq!(report["locales"], json!(["de", "en"]));
    let warnings = report["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["locale"], "fr");
    assert_eq!(annotation_messages(&report).len(), 1);
}

// ============================================================================
// check_all tests
// ============================================================================

#[tokio::test]
async fn test_check_all() {
    let fixture = fixture_with_missing_translation().unwrap();
    let server = LocdiffMcpServer::new();

    let params = Parameters(CheckAllParams {
        project_root_path: fixture.root(),
    });
    let result = extract_tool_result_json(&server.check_all(params).await.unwrap());

    assert_eq!(result["documentsChecked"], 2);
    assert_eq!(result["warningCount"], 1);
    let documents = result["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(
        documents[0]["document"],
        &*fixture.locale_path("en").to_string_lossy()
    );
}

// ============================================================================
// hover / close_document tests
// ============================================================================

#[tokio::test]
async fn test_hover_uses_latest_pass() {
    let fixture = fixture_with_missing_translation().unwrap();
    let server = LocdiffMcpServer::new();

    // Nothing cached yet.
    assert_eq!(hover(&server, &fixture, 3, 6).await, Value::Null);

    check_document(&server, &fixture, "messages/en.json", None).await;

    let result = hover(&server, &fixture, 3, 6).await;
    assert_eq!(result["key"], "nested.message");
    assert_eq!(
        result["contents"],
        r#"Missing translations for "nested.message" in: de"#
    );
    assert_eq!(result["value"], "Hi");

    assert_eq!(hover(&server, &fixture, 1, 4).await, Value::Null);
}

#[tokio::test]
async fn test_close_document_drops_cache() {
    let fixture = fixture_with_missing_translation().unwrap();
    let server = LocdiffMcpServer::new();
    check_document(&server, &fixture, "messages/en.json", None).await;

    let params = Parameters(CloseDocumentParams {
        project_root_path: fixture.root(),
        file_path: "messages/en.json".to_string(),
    });
    let result = extract_tool_result_json(&server.close_document(params).await.unwrap());
    assert_eq!(result["closed"], true);

    assert_eq!(hover(&server, &fixture, 3, 6).await, Value::Null);
}

#[tokio::test]
async fn test_equivalent_root_spellings_share_a_session() {
    let fixture = fixture_with_missing_translation().unwrap();
    let server = LocdiffMcpServer::new();
    check_document(&server, &fixture, "messages/en.json", None).await;

    let params = Parameters(HoverParams {
        project_root_path: format!("{}/", fixture.root()),
        file_path: "messages/en.json".to_string(),
        line: 3,
        character: 6,
    });
    let result = extract_tool_result_json(&server.hover(params).await.unwrap());

    assert_eq!(result["hover"]["key"], "nested.message");
}

use locdiff::mcp::{
    LocdiffMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::with_messages(vec![("en", json!({}))]).unwrap();
    let server = LocdiffMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["translationsRoot"], "./messages");
    assert_eq!(json_result["config"]["mode"], "auto");
    assert_eq!(json_result["config"]["emptyValues"], "missing");
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "messagesRoot": "locales",
            "mode": "folder",
            "checks": ["missing-translation"]
        }))
        .unwrap();

    let server = LocdiffMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["translationsRoot"], "locales");
    assert_eq!(json_result["config"]["mode"], "folder");
    assert_eq!(json_result["config"]["checks"], json!(["missing-translation"]));
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "mode": "flat" })).unwrap();

    let server = LocdiffMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales_single_file() {
    let fixture = McpTestFixture::with_messages(vec![
        ("en", json!({"key": "value"})),
        ("de", json!({"key": "Wert"})),
    ])
    .unwrap();
    let server = LocdiffMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["layout"], "single-file");
    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 2);
    assert_eq!(locales[0]["locale"], "de");
    assert_eq!(locales[1]["locale"], "en");
    assert_eq!(
        locales[1]["filePaths"],
        json!([fixture.locale_path("en").to_string_lossy()])
    );
}

#[tokio::test]
async fn test_get_locales_folder() {
    let fixture = McpTestFixture::new().unwrap();
    let messages = fixture.root_path().join("messages");
    for (path, content) in [
        ("en/common.json", r#"{"save": "Save"}"#),
        ("en/errors.json", r#"{"notFound": "Not found"}"#),
        ("de/common.json", r#"{"save": "Speichern"}"#),
    ] {
        let path = messages.join(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    let server = LocdiffMcpServer::new();
    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["layout"], "folder");
    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales[0]["locale"], "de");
    assert_eq!(locales[0]["filePaths"].as_array().unwrap().len(), 1);
    assert_eq!(locales[1]["locale"], "en");
    assert_eq!(locales[1]["filePaths"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_locales_without_translations_root() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::remove_dir(fixture.root_path().join("messages")).unwrap();

    let server = LocdiffMcpServer::new();
    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["locales"], json!([]));
}

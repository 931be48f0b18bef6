use std::{
    collections::{BTreeMap, HashMap, hash_map::Entry},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use super::types::{
    CheckAllParams, CheckAllResult, CheckDocumentParams, CloseDocumentParams, CloseDocumentResult,
    ConfigDto, FilesChangedParams, GetConfigParams, GetLocalesParams, HoverParams, HoverResult,
    LocaleInfo, LocalesResult, RefreshResult, ReloadConfigParams,
};
use crate::{
    config::load_config,
    core::{
        Position,
        layout::{discover_locales, document_identity},
    },
    session::{FileChange, Session},
    utils::absolutize_from_cwd,
};

/// MCP server holding one session per project root.
#[derive(Clone)]
pub struct LocdiffMcpServer {
    sessions: Arc<Mutex<HashMap<PathBuf, Session>>>,
    tool_router: ToolRouter<Self>,
}

impl Default for LocdiffMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl LocdiffMcpServer {
    /// Run `f` on the session of `project_root`, creating it on first use.
    fn with_session<T>(
        &self,
        project_root: &str,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, McpError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| McpError::internal_error("Session lock poisoned", None))?;

        // `/p`, `/p/` and `/p/.` share one session.
        let session = match sessions.entry(absolutize_from_cwd(Path::new(project_root))) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let session = Session::load(entry.key()).map_err(|e| {
                    McpError::internal_error(format!("Failed to load config: {:#}", e), None)
                })?;
                entry.insert(session)
            }
        };
        Ok(f(session))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

fn refresh_open_documents(session: &mut Session, documents: Vec<PathBuf>) -> RefreshResult {
    RefreshResult {
        refreshed: documents
            .iter()
            .map(|document| session.check_document(document))
            .collect(),
    }
}

#[tool_router]
impl LocdiffMcpServer {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current locdiff configuration
    #[tool(description = "Get the current locdiff configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: result.config,
        })
    }

    /// Get available locales and their translation documents
    #[tool(
        description = "Get the resolved translations root, its layout (single-file or folder), and the translation documents of every locale."
    )]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = self.with_session(&params.0.project_root_path, |session| {
            let root = session.translations_root();
            let layout = session.layout();

            let mut by_locale: BTreeMap<String, Vec<String>> = discover_locales(root, layout)
                .unwrap_or_default()
                .into_iter()
                .map(|locale| (locale, Vec::new()))
                .collect();
            for document in session.translation_documents() {
                if let Some(identity) = document_identity(root, layout, &document) {
                    by_locale
                        .entry(identity.locale)
                        .or_default()
                        .push(document.to_string_lossy().to_string());
                }
            }

            LocalesResult {
                translations_root: root.to_string_lossy().to_string(),
                layout,
                locales: by_locale
                    .into_iter()
                    .map(|(locale, file_paths)| LocaleInfo { locale, file_paths })
                    .collect(),
            }
        })?;

        json_result(&result)
    }

    /// Run a pass for one translation document
    #[tool(
        description = "Compare one translation document with the equivalent files of every other locale. Pass `text` to check unsaved editor content; the document then stays open until close_document. Returns the warnings anchored to key positions (zero-based)."
    )]
    pub async fn check_document(
        &self,
        params: Parameters<CheckDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        let CheckDocumentParams {
            project_root_path,
            file_path,
            text,
        } = params.0;

        let report = self.with_session(&project_root_path, |session| {
            let path = Path::new(&file_path);
            match text {
                Some(text) => session.open_document(path, text),
                None => session.check_document(path),
            }
        })?;

        json_result(&report)
    }

    /// Run a pass for every translation document
    #[tool(
        description = "Check every translation document under the translations root. Returns only documents with warnings or skipped locale files."
    )]
    pub async fn check_all(
        &self,
        params: Parameters<CheckAllParams>,
    ) -> Result<CallToolResult, McpError> {
        let reports = self.with_session(&params.0.project_root_path, Session::check_all)?;

        let documents_checked = reports.iter().filter(|r| r.skipped.is_none()).count();
        let warning_count = reports.iter().map(|r| r.annotations.len()).sum();
        let documents = reports
            .into_iter()
            .filter(|r| !r.annotations.is_empty() || !r.warnings.is_empty())
            .collect();

        json_result(&CheckAllResult {
            documents_checked,
            warning_count,
            documents,
        })
    }

    /// Hover text at a position, from the latest pass
    #[tool(
        description = "Get the warning text at a zero-based line/character of a translation document. Answers from the latest check_document result only; returns null when nothing is cached or no warning covers the position."
    )]
    pub async fn hover(&self, params: Parameters<HoverParams>) -> Result<CallToolResult, McpError> {
        let HoverParams {
            project_root_path,
            file_path,
            line,
            character,
        } = params.0;

        let hover = self.with_session(&project_root_path, |session| {
            session.hover(
                Path::new(&file_path),
                Position::new(line as usize, character as usize),
            )
        })?;

        json_result(&HoverResult { hover })
    }

    /// Forget an open document and its cached result
    #[tool(description = "Close a document opened with check_document and drop its cached result.")]
    pub async fn close_document(
        &self,
        params: Parameters<CloseDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        let CloseDocumentParams {
            project_root_path,
            file_path,
        } = params.0;

        self.with_session(&project_root_path, |session| {
            session.on_document_closed(Path::new(&file_path))
        })?;

        json_result(&CloseDocumentResult { closed: true })
    }

    /// File-system change notification
    #[tool(
        description = "Notify that files were created, modified or deleted. Changes under the translations root drop every cached result; open documents are checked again and returned."
    )]
    pub async fn notify_files_changed(
        &self,
        params: Parameters<FilesChangedParams>,
    ) -> Result<CallToolResult, McpError> {
        let FilesChangedParams {
            project_root_path,
            changes,
        } = params.0;
        let changes: Vec<FileChange> = changes.iter().map(FileChange::from).collect();

        let result = self.with_session(&project_root_path, |session| {
            let documents = session.on_files_changed(&changes);
            refresh_open_documents(session, documents)
        })?;

        json_result(&result)
    }

    /// Reload .locdiffrc.json
    #[tool(
        description = "Reload .locdiffrc.json after it changed. Drops every cached result and checks open documents again."
    )]
    pub async fn reload_config(
        &self,
        params: Parameters<ReloadConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = params.0.project_root_path;
        let loaded = load_config(Path::new(&root))
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let result = self.with_session(&root, |session| {
            let documents = session.on_config_changed(loaded.config);
            refresh_open_documents(session, documents)
        })?;

        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for LocdiffMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "locdiff MCP reports translation keys that exist in one locale file but not in another.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get the translations root, its layout and every locale's documents\n\
                 3. check_all - Check every translation document\n\
                 4. check_document - Check one document (optionally with unsaved text)\n\
                 5. hover - Get the warning text at a position of a checked document\n\
                 6. close_document - Forget an open document\n\
                 7. notify_files_changed - Report file changes so cached results are refreshed\n\
                 8. reload_config - Apply an edited .locdiffrc.json\n\n\
                 Recommended Workflow:\n\
                 1. Use check_all to find documents with missing keys\n\
                 2. Add the missing keys to the locale files\n\
                 3. Call notify_files_changed, then check_document to confirm the fix"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = LocdiffMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

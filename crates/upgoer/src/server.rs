//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the tokenizer, classifier, and renderer over stdio so editors and
//! assistants can highlight hard words and long sentences in text they hold.
//!
//! Each `#[tool]` method delegates to `upgoer_core`; no pipeline logic lives
//! here. Tool calls run the synchronous pipeline start to finish.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use upgoer_core::error::check_input_size;
use upgoer_core::markdown;
use upgoer_core::surface::html::HtmlSurface;
use upgoer_core::surface::tree::TreeSurface;
use upgoer_core::tokenize::{TokenKind, tokenize};

use crate::commands::Engine;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_info_format")]
    pub format: String,
}

fn default_info_format() -> String {
    "text".to_string()
}

/// Parameters for the `tokenize_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TokenizeTextParams {
    /// The text to split into tokens.
    pub text: String,
}

/// Parameters for the `classify_words` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyWordsParams {
    /// Words to classify.
    pub words: Vec<String>,
}

/// Parameters for the `render_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RenderTextParams {
    /// The text to render.
    pub text: String,
    /// Output format: "html" or "json".
    #[serde(default = "default_render_format")]
    pub format: String,
    /// Whether to strip markdown formatting before rendering.
    #[serde(default)]
    pub strip_markdown: bool,
}

fn default_render_format() -> String {
    "json".to_string()
}

#[derive(Serialize)]
struct TokenEntry<'a> {
    text: &'a str,
    kind: TokenKind,
}

#[derive(Serialize)]
struct WordEntry<'a> {
    word: &'a str,
    label: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

/// MCP server exposing the rendering pipeline to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    engine: Arc<Engine>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(Engine::default(), Some(upgoer_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server using `engine` for every tool call.
    pub fn new(engine: Engine, max_input_bytes: Option<usize>) -> Self {
        Self {
            engine: Arc::new(engine),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        check_input_size(text.len(), self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Split text into tokens.
    #[tool(
        description = "Split English text into tokens (words, contractions, hyphenated words, ellipses, punctuation). Returns each token with its kind."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn tokenize_text(
        &self,
        Parameters(params): Parameters<TokenizeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let tokens: Vec<TokenEntry<'_>> = tokenize(&params.text)
            .into_iter()
            .map(|text| TokenEntry {
                text,
                kind: TokenKind::of(text),
            })
            .collect();

        tracing::info!(tool = "tokenize_text", count = tokens.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &tokens,
        )?)]))
    }

    /// Label words as approved, short, long, or very long.
    #[tool(
        description = "Classify words: preApproved (common), probablyOk (short), toolongN (medium, N letters), or wtf (very long)."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", count = params.words.len()))]
    fn classify_words(
        &self,
        Parameters(params): Parameters<ClassifyWordsParams>,
    ) -> Result<CallToolResult, McpError> {
        let renderer = self.engine.renderer();
        let classifier = renderer.classifier();
        let entries: Vec<WordEntry<'_>> = params
            .words
            .iter()
            .map(|word| WordEntry {
                word,
                label: classifier.classify(word).label().into_owned(),
            })
            .collect();

        tracing::info!(tool = "classify_words", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &entries,
        )?)]))
    }

    /// Render text with word styling and sentence shrinking.
    #[tool(
        description = "Render text: every word labeled by category, long sentences shrunk. Returns an HTML fragment or a JSON tree with a summary."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", format = %params.format))]
    fn render_text(
        &self,
        Parameters(params): Parameters<RenderTextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        tracing::debug!(
            tool = "render_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let prose = if params.strip_markdown {
            markdown::strip_to_prose(&params.text)
        } else {
            params.text
        };
        let document = self.engine.renderer().document(&prose);

        let text = match params.format.as_str() {
            "html" => document.render_to(&mut HtmlSurface).into_markup(),
            "json" => to_json(&serde_json::json!({
                "tree": document.render_to(&mut TreeSurface),
                "summary": document.summary(),
            }))?,
            other => {
                return Err(McpError::invalid_params(
                    format!("unknown format '{other}' (expected html or json)"),
                    None,
                ));
            }
        };

        tracing::info!(
            tool = "render_text",
            sentences = document.sentences.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use render_text to see which words are uncommon and which sentences run long.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

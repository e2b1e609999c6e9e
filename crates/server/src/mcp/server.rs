//! Newline-delimited JSON-RPC server loop over stdin/stdout.
//!
//! One request per line in, one response per line out. Tracing goes to
//! stderr; stdout carries nothing but protocol frames.

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::error::ServerError;
use crate::instructions;
use crate::tools::{ToolExecutor, all_tools};

use super::types::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, McpToolDef, PROTOCOL_VERSION,
    ServerCapabilities, ServerInfo, ToolsCallParams, ToolsCallResult, ToolsCapability, error_codes,
};

/// MCP server bound to a single backend API client.
pub struct McpServer {
    api: ApiClient,
}

impl McpServer {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Run the serving loop until stdin closes.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Io` when stdin or stdout fails; per-request
    /// failures are reported in-band as JSON-RPC errors.
    pub async fn serve(&self) -> Result<(), ServerError> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!("serving on stdio");
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(line).await {
                let payload = serde_json::to_string(&response)?;
                stdout.write_all(payload.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }
        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw protocol line. Returns `None` for notifications.
    async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "unparseable request line");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("parse error: {e}"),
                ));
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "notification");
            return None;
        }

        Some(self.dispatch(request).await)
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone().unwrap_or(Value::Null);
        debug!(method = %request.method, "request");

        match request.method.as_str() {
            "initialize" => JsonRpcResponse::result(id, Self::initialize_result()),
            "ping" => JsonRpcResponse::result(id, json!({})),
            "tools/list" => match serde_json::to_value(Self::tools_list_result()) {
                Ok(result) => JsonRpcResponse::result(id, result),
                Err(e) => {
                    JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string())
                }
            },
            "tools/call" => self.tools_call(id, request.params).await,
            method => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("method not found: {method}"),
            ),
        }
    }

    fn initialize_result() -> Value {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: instructions::SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            instructions: Some(instructions::INSTRUCTIONS.to_string()),
        };
        serde_json::to_value(result).unwrap_or_else(|_| json!({}))
    }

    fn tools_list_result() -> super::types::ToolsListResult {
        let tools = all_tools()
            .into_iter()
            .map(|tool| McpToolDef {
                name: tool.name,
                description: Some(tool.description),
                input_schema: tool.input_schema,
            })
            .collect();
        super::types::ToolsListResult { tools }
    }

    async fn tools_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolsCallParams = match params.map(serde_json::from_value).transpose() {
            Ok(Some(params)) => params,
            Ok(None) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "missing params for tools/call",
                );
            }
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid params: {e}"),
                );
            }
        };

        let executor = ToolExecutor::new(&self.api);
        let result = match executor.execute(&params.name, &params.arguments).await {
            Ok(content) => ToolsCallResult::ok(content),
            Err(ServerError::UnknownTool(name)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("unknown tool: {name}"),
                );
            }
            Err(ServerError::InvalidParams(message)) => {
                return JsonRpcResponse::error(id, error_codes::INVALID_PARAMS, message);
            }
            // Backend and serialization failures surface to the agent as a
            // tool-level error, not a protocol fault.
            Err(e) => {
                warn!(tool = %params.name, error = %e, "tool execution failed");
                ToolsCallResult::fail(e.to_string())
            }
        };

        match serde_json::to_value(&result) {
            Ok(result) => JsonRpcResponse::result(id, result),
            Err(e) => JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
        }
    }
}

/**
 * MCP stdio server
 *
 * Reads newline-delimited JSON-RPC 2.0 messages, answers the
 * handshake and routes tool requests to the dispatcher.
 */

use super::error_codes::{INVALID_PARAMS, METHOD_NOT_FOUND};
use super::types::*;
use super::{MCPError, MCPResult};
use crate::tools::ToolDispatcher;
use log::{debug, error, info, warn};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Name reported in the `initialize` handshake
pub const SERVER_NAME: &str = "yandex-disk-mcp";

/// MCP server bound to a tool dispatcher
pub struct MCPServer {
    dispatcher: ToolDispatcher,
}

impl MCPServer {
    /// Create a new MCP server instance
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Serve on the process stdin/stdout until EOF
    pub async fn run_stdio(&self) -> anyhow::Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve on any line-oriented reader/writer pair until EOF
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Yandex.Disk MCP server running on stdio");

        let mut line = String::new();
        loop {
            line.clear();
            let n = reader.read_line(&mut line).await?;
            if n == 0 {
                info!("stdin closed, shutting down");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(trimmed).await {
                let mut frame = serde_json::to_string(&response)?;
                frame.push('\n');
                writer.write_all(frame.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        Ok(())
    }

    /// Handle one raw message; `None` for notifications
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request = match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                let err = MCPError::from(e);
                return Some(JsonRpcResponse::failure(Value::Null, err.into()));
            }
        };

        let Some(id) = request.id.clone() else {
            self.handle_notification(&request);
            return None;
        };

        let response = match self.handle_request(&request).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => {
                debug!("Request {} failed: {}", request.method, e);
                JsonRpcResponse::failure(id, e.into())
            }
        };
        Some(response)
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => info!("Client finished initialization"),
            "notifications/cancelled" => debug!("Client cancelled a request"),
            other => debug!("Ignoring notification: {}", other),
        }
    }

    async fn handle_request(&self, request: &JsonRpcRequest) -> MCPResult<Value> {
        match request.method.as_str() {
            "initialize" => {
                let params: InitializeRequest =
                    parse_params(request.params.clone().unwrap_or_else(|| json!({})))?;
                if let Some(client) = &params.client_info {
                    info!("Initializing session for {} {}", client.name, client.version);
                }
                Ok(serde_json::to_value(initialize_response())?)
            }
            "ping" => Ok(json!({})),
            "tools/list" => {
                let tools = self.dispatcher.list_tools();
                debug!("Listing {} tools", tools.len());
                Ok(serde_json::to_value(ListToolsResponse { tools })?)
            }
            "tools/call" => {
                let params = request
                    .params
                    .clone()
                    .ok_or_else(|| MCPError::invalid_params("Missing params for tools/call"))?;
                let call: CallToolRequest = parse_params(params)?;
                let result = self
                    .dispatcher
                    .call_tool(&call.name, call.arguments.as_ref())
                    .await?;
                Ok(serde_json::to_value(result)?)
            }
            other => {
                error!("Unsupported method: {}", other);
                Err(MCPError::new(
                    METHOD_NOT_FOUND,
                    format!("Method not found: {}", other),
                ))
            }
        }
    }
}

fn parse_params<T: serde::de::DeserializeOwned>(params: Value) -> MCPResult<T> {
    serde_json::from_value(params)
        .map_err(|e| MCPError::new(INVALID_PARAMS, format!("Invalid params: {}", e)))
}

fn initialize_response() -> InitializeResponse {
    InitializeResponse {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability::default()),
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    }
}

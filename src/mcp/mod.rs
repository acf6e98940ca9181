/**
 * MCP (Model Context Protocol) Module
 *
 * This module implements the server side of the protocol over stdio,
 * letting AI agents drive Yandex.Disk through standardized tool calls.
 */

pub mod server;
pub mod types;

pub use server::MCPServer;
pub use types::*;

use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 error codes used by the server
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Result type for MCP operations
pub type MCPResult<T> = Result<T, MCPError>;

/// Errors reported to the client in a JSON-RPC error envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MCPError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl MCPError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_PARAMS, message)
    }

    pub fn method_not_found(message: impl Into<String>) -> Self {
        Self::new(error_codes::METHOD_NOT_FOUND, message)
    }

    /// Wrap a non-protocol failure, keeping its message
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::new(error_codes::INTERNAL_ERROR, format!("Error: {}", err))
    }
}

impl std::fmt::Display for MCPError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MCP Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for MCPError {}

impl From<serde_json::Error> for MCPError {
    fn from(err: serde_json::Error) -> Self {
        MCPError {
            code: error_codes::PARSE_ERROR,
            message: format!("Parse Error: {}", err),
            data: None,
        }
    }
}

impl From<MCPError> for JsonRpcError {
    fn from(err: MCPError) -> Self {
        JsonRpcError {
            code: err.code,
            message: err.message,
            data: err.data,
        }
    }
}

/**
 * Yandex.Disk tool catalog
 *
 * Static descriptors for the ten disk tools, plus argument decoding
 * and dispatch to the API client.
 */

pub mod args;
pub mod dispatch;

pub use args::ToolCall;
pub use dispatch::ToolDispatcher;

use crate::mcp::{MCPToolDefinition, ToolAnnotations};
use serde_json::{json, Value};

pub const INFO: &str = "yandex_disk_info";
pub const LIST_FILES: &str = "yandex_disk_list_files";
pub const GET_METADATA: &str = "yandex_disk_get_metadata";
pub const CREATE_FOLDER: &str = "yandex_disk_create_folder";
pub const GET_UPLOAD_URL: &str = "yandex_disk_get_upload_url";
pub const GET_DOWNLOAD_URL: &str = "yandex_disk_get_download_url";
pub const DELETE: &str = "yandex_disk_delete";
pub const COPY: &str = "yandex_disk_copy";
pub const MOVE: &str = "yandex_disk_move";
pub const LAST_UPLOADED: &str = "yandex_disk_last_uploaded";

pub const DEFAULT_LIST_LIMIT: u64 = 20;
pub const DEFAULT_LIST_OFFSET: u64 = 0;
pub const DEFAULT_LAST_UPLOADED_LIMIT: u64 = 10;

fn read_only() -> Option<ToolAnnotations> {
    Some(ToolAnnotations {
        read_only_hint: Some(true),
        idempotent_hint: Some(true),
        destructive_hint: Some(false),
    })
}

fn mutating(idempotent: bool, destructive: bool) -> Option<ToolAnnotations> {
    Some(ToolAnnotations {
        read_only_hint: Some(false),
        idempotent_hint: Some(idempotent),
        destructive_hint: Some(destructive),
    })
}

fn tool(
    name: &str,
    description: &str,
    input_schema: Value,
    annotations: Option<ToolAnnotations>,
) -> MCPToolDefinition {
    MCPToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
        annotations,
    }
}

fn path_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "path": { "type": "string", "description": description }
        },
        "required": ["path"]
    })
}

fn transfer_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "from": { "type": "string", "description": "Source path" },
            "to": { "type": "string", "description": "Destination path" },
            "overwrite": {
                "type": "boolean",
                "description": "Overwrite if destination exists (default: true)",
                "default": true
            }
        },
        "required": ["from", "to"]
    })
}

/// Every tool the server exposes, in catalog order
pub fn tool_definitions() -> Vec<MCPToolDefinition> {
    vec![
        tool(
            INFO,
            "Get information about Yandex.Disk (total space, used space, etc.)",
            json!({ "type": "object", "properties": {} }),
            read_only(),
        ),
        tool(
            LIST_FILES,
            "List all files on Yandex.Disk (flat list)",
            json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of files to return (default: 20)",
                        "default": DEFAULT_LIST_LIMIT
                    },
                    "offset": {
                        "type": "number",
                        "description": "Offset for pagination (default: 0)",
                        "default": DEFAULT_LIST_OFFSET
                    }
                }
            }),
            read_only(),
        ),
        tool(
            GET_METADATA,
            "Get metadata for a file or folder",
            path_schema("Path to the file or folder (e.g., '/Documents/file.txt')"),
            read_only(),
        ),
        tool(
            CREATE_FOLDER,
            "Create a new folder on Yandex.Disk",
            path_schema("Path for the new folder (e.g., '/Documents/NewFolder')"),
            mutating(false, false),
        ),
        tool(
            GET_UPLOAD_URL,
            "Get URL for uploading a file to Yandex.Disk",
            json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Path where to upload the file (e.g., '/Documents/file.txt')"
                    },
                    "overwrite": {
                        "type": "boolean",
                        "description": "Whether to overwrite if file exists (default: true)",
                        "default": true
                    }
                },
                "required": ["path"]
            }),
            read_only(),
        ),
        tool(
            GET_DOWNLOAD_URL,
            "Get URL for downloading a file from Yandex.Disk",
            path_schema("Path to the file to download (e.g., '/Documents/file.txt')"),
            read_only(),
        ),
        tool(
            DELETE,
            "Delete a file or folder from Yandex.Disk",
            json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Path to the file or folder to delete"
                    },
                    "permanently": {
                        "type": "boolean",
                        "description": "Delete permanently (true) or move to trash (false, default)",
                        "default": false
                    }
                },
                "required": ["path"]
            }),
            mutating(false, true),
        ),
        tool(
            COPY,
            "Copy a file or folder on Yandex.Disk",
            transfer_schema(),
            mutating(false, true),
        ),
        tool(
            MOVE,
            "Move or rename a file or folder on Yandex.Disk",
            transfer_schema(),
            mutating(false, true),
        ),
        tool(
            LAST_UPLOADED,
            "Get list of recently uploaded files",
            json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "number",
                        "description": "Maximum number of files to return (default: 10)",
                        "default": DEFAULT_LAST_UPLOADED_LIMIT
                    }
                }
            }),
            read_only(),
        ),
    ]
}

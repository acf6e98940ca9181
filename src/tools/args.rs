/**
 * Tool argument decoding
 *
 * Turns a tool name plus its loosely-typed argument object into a
 * `ToolCall`, validating required fields and applying defaults once.
 */

use super::{
    COPY, CREATE_FOLDER, DEFAULT_LAST_UPLOADED_LIMIT, DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET,
    DELETE, GET_DOWNLOAD_URL, GET_METADATA, GET_UPLOAD_URL, INFO, LAST_UPLOADED, LIST_FILES,
    MOVE,
};
use crate::mcp::{MCPError, MCPResult};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

/// A decoded invocation of one catalog tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    Info,
    ListFiles { limit: u64, offset: u64 },
    GetMetadata { path: String },
    CreateFolder { path: String },
    GetUploadUrl { path: String, overwrite: bool },
    GetDownloadUrl { path: String },
    Delete { path: String, permanently: bool },
    Copy { from: String, to: String, overwrite: bool },
    Move { from: String, to: String, overwrite: bool },
    LastUploaded { limit: u64 },
}

/// `limit`/`offset` accept any JSON number with a whole, non-negative value
fn whole_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    number
        .as_u64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .map(Some)
        .ok_or_else(|| {
            de::Error::custom(format!(
                "expected a non-negative whole number, got {}",
                number
            ))
        })
}

#[derive(Debug, Default, Deserialize)]
struct ListArgs {
    #[serde(default, deserialize_with = "whole_number")]
    limit: Option<u64>,
    #[serde(default, deserialize_with = "whole_number")]
    offset: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LimitArgs {
    #[serde(default, deserialize_with = "whole_number")]
    limit: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct PathOnlyArgs {
    #[serde(default)]
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UploadArgs {
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    overwrite: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct DeleteArgs {
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    permanently: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct TransferArgs {
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    overwrite: Option<bool>,
}

impl TransferArgs {
    fn require_endpoints(self) -> MCPResult<(String, String, bool)> {
        match (non_empty(self.from), non_empty(self.to)) {
            (Some(from), Some(to)) => Ok((from, to, self.overwrite != Some(false))),
            _ => Err(MCPError::invalid_params("from and to are required")),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn require_path(path: Option<String>) -> MCPResult<String> {
    non_empty(path).ok_or_else(|| MCPError::invalid_params("path is required"))
}

/// Decode only the fields `T` declares; anything else in `args` is ignored
fn decode<T: DeserializeOwned>(name: &str, args: &Map<String, Value>) -> MCPResult<T> {
    serde_json::from_value(Value::Object(args.clone()))
        .map_err(|e| MCPError::invalid_params(format!("Invalid arguments for {}: {}", name, e)))
}

impl ToolCall {
    /// Decode an invocation; unknown names are method-not-found
    pub fn parse(name: &str, arguments: Option<&Map<String, Value>>) -> MCPResult<Self> {
        let empty = Map::new();
        let args = arguments.unwrap_or(&empty);

        let call = match name {
            INFO => ToolCall::Info,
            LIST_FILES => {
                let page: ListArgs = decode(name, args)?;
                ToolCall::ListFiles {
                    limit: page.limit.unwrap_or(DEFAULT_LIST_LIMIT),
                    offset: page.offset.unwrap_or(DEFAULT_LIST_OFFSET),
                }
            }
            LAST_UPLOADED => {
                let page: LimitArgs = decode(name, args)?;
                ToolCall::LastUploaded {
                    limit: page.limit.unwrap_or(DEFAULT_LAST_UPLOADED_LIMIT),
                }
            }
            GET_METADATA => {
                let args: PathOnlyArgs = decode(name, args)?;
                ToolCall::GetMetadata {
                    path: require_path(args.path)?,
                }
            }
            CREATE_FOLDER => {
                let args: PathOnlyArgs = decode(name, args)?;
                ToolCall::CreateFolder {
                    path: require_path(args.path)?,
                }
            }
            GET_UPLOAD_URL => {
                let args: UploadArgs = decode(name, args)?;
                ToolCall::GetUploadUrl {
                    path: require_path(args.path)?,
                    overwrite: args.overwrite != Some(false),
                }
            }
            GET_DOWNLOAD_URL => {
                let args: PathOnlyArgs = decode(name, args)?;
                ToolCall::GetDownloadUrl {
                    path: require_path(args.path)?,
                }
            }
            DELETE => {
                let args: DeleteArgs = decode(name, args)?;
                ToolCall::Delete {
                    path: require_path(args.path)?,
                    permanently: args.permanently == Some(true),
                }
            }
            COPY => {
                let (from, to, overwrite) =
                    decode::<TransferArgs>(name, args)?.require_endpoints()?;
                ToolCall::Copy { from, to, overwrite }
            }
            MOVE => {
                let (from, to, overwrite) =
                    decode::<TransferArgs>(name, args)?.require_endpoints()?;
                ToolCall::Move { from, to, overwrite }
            }
            _ => return Err(MCPError::method_not_found(format!("Unknown tool: {}", name))),
        };

        Ok(call)
    }

    /// Catalog name of the tool this call targets
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::Info => INFO,
            ToolCall::ListFiles { .. } => LIST_FILES,
            ToolCall::GetMetadata { .. } => GET_METADATA,
            ToolCall::CreateFolder { .. } => CREATE_FOLDER,
            ToolCall::GetUploadUrl { .. } => GET_UPLOAD_URL,
            ToolCall::GetDownloadUrl { .. } => GET_DOWNLOAD_URL,
            ToolCall::Delete { .. } => DELETE,
            ToolCall::Copy { .. } => COPY,
            ToolCall::Move { .. } => MOVE,
            ToolCall::LastUploaded { .. } => LAST_UPLOADED,
        }
    }
}

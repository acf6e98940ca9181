/**
 * Tool dispatcher
 *
 * Routes decoded tool calls to the Yandex.Disk client and wraps the
 * outcome in the MCP result shape.
 */

use super::{tool_definitions, ToolCall};
use crate::disk::{DiskClient, DiskResult};
use crate::mcp::{MCPError, MCPResult, MCPToolDefinition, ToolExecutionResult};
use log::{debug, error, info};
use serde_json::{Map, Value};

/// Stateless router from tool invocations to API calls
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    client: DiskClient,
}

impl ToolDispatcher {
    pub fn new(client: DiskClient) -> Self {
        Self { client }
    }

    /// Static tool catalog
    pub fn list_tools(&self) -> Vec<MCPToolDefinition> {
        tool_definitions()
    }

    /// Execute one invocation by name
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> MCPResult<ToolExecutionResult> {
        debug!("Executing tool: {} with args: {:?}", name, arguments);

        let start_time = std::time::Instant::now();
        let call = ToolCall::parse(name, arguments)?;

        match self.execute(&call).await {
            Ok(value) => {
                info!(
                    "Tool {} executed successfully in {}ms",
                    name,
                    start_time.elapsed().as_millis()
                );
                let text = serde_json::to_string_pretty(&value).map_err(MCPError::internal)?;
                Ok(ToolExecutionResult::text(text))
            }
            Err(e) => {
                error!("Tool {} execution failed: {}", name, e);
                Err(MCPError::internal(e))
            }
        }
    }

    async fn execute(&self, call: &ToolCall) -> DiskResult<Value> {
        let client = &self.client;
        match call {
            ToolCall::Info => client.get_disk_info().await,
            ToolCall::ListFiles { limit, offset } => client.list_files(*limit, *offset).await,
            ToolCall::GetMetadata { path } => client.get_metadata(path).await,
            ToolCall::CreateFolder { path } => client.create_folder(path).await,
            ToolCall::GetUploadUrl { path, overwrite } => {
                client.get_upload_url(path, *overwrite).await
            }
            ToolCall::GetDownloadUrl { path } => client.get_download_url(path).await,
            ToolCall::Delete { path, permanently } => {
                client.delete_resource(path, *permanently).await
            }
            ToolCall::Copy { from, to, overwrite } => {
                client.copy_resource(from, to, *overwrite).await
            }
            ToolCall::Move { from, to, overwrite } => {
                client.move_resource(from, to, *overwrite).await
            }
            ToolCall::LastUploaded { limit } => client.get_last_uploaded(*limit).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiskConfig;
    use crate::mcp::{error_codes, ToolContent};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_dispatcher() -> (MockServer, ToolDispatcher) {
        let server = MockServer::start().await;
        let config = DiskConfig::new("test-token").with_base_url(server.uri());
        (server, ToolDispatcher::new(DiskClient::new(config)))
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn text_of(result: &ToolExecutionResult) -> &str {
        assert_eq!(result.content.len(), 1);
        match &result.content[0] {
            ToolContent::Text { text } => text.as_str(),
        }
    }

    #[tokio::test]
    async fn test_list_files_applies_defaults() {
        let (server, dispatcher) = test_dispatcher().await;

        Mock::given(method("GET"))
            .and(path("/resources/files"))
            .and(query_param("limit", "20"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let result = dispatcher
            .call_tool("yandex_disk_list_files", Some(&args(json!({}))))
            .await
            .unwrap();

        assert_eq!(text_of(&result), "{\n  \"items\": []\n}");
        assert_eq!(result.is_error, None);
    }

    #[tokio::test]
    async fn test_delete_defaults_to_trash() {
        let (server, dispatcher) = test_dispatcher().await;

        Mock::given(method("DELETE"))
            .and(path("/resources"))
            .and(query_param("path", "/x"))
            .and(query_param("permanently", "false"))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "href": "op" })))
            .expect(1)
            .mount(&server)
            .await;

        dispatcher
            .call_tool("yandex_disk_delete", Some(&args(json!({ "path": "/x" }))))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_permanently_when_requested() {
        let (server, dispatcher) = test_dispatcher().await;

        Mock::given(method("DELETE"))
            .and(path("/resources"))
            .and(query_param("path", "/x"))
            .and(query_param("permanently", "true"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let result = dispatcher
            .call_tool(
                "yandex_disk_delete",
                Some(&args(json!({ "path": "/x", "permanently": true }))),
            )
            .await
            .unwrap();
        assert_eq!(text_of(&result), "null");
    }

    #[tokio::test]
    async fn test_move_sends_overwrite_false() {
        let (server, dispatcher) = test_dispatcher().await;

        Mock::given(method("POST"))
            .and(path("/resources/move"))
            .and(query_param("from", "/old name"))
            .and(query_param("path", "/new name"))
            .and(query_param("overwrite", "false"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "href": "h" })))
            .expect(1)
            .mount(&server)
            .await;

        dispatcher
            .call_tool(
                "yandex_disk_move",
                Some(&args(json!({ "from": "/old name", "to": "/new name", "overwrite": false }))),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_upstream_error_becomes_internal_error() {
        let (server, dispatcher) = test_dispatcher().await;

        Mock::given(method("GET"))
            .and(path("/resources"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
            .mount(&server)
            .await;

        let err = dispatcher
            .call_tool("yandex_disk_get_metadata", Some(&args(json!({ "path": "/nope" }))))
            .await
            .unwrap_err();

        assert_eq!(err.code, error_codes::INTERNAL_ERROR);
        assert!(err.message.contains("404"));
        assert!(err.message.contains("Not Found"));
        assert!(err.message.contains("Not found"));
    }

    #[tokio::test]
    async fn test_validation_errors_skip_network() {
        let (server, dispatcher) = test_dispatcher().await;

        let err = dispatcher
            .call_tool("yandex_disk_copy", Some(&args(json!({ "from": "/a" }))))
            .await
            .unwrap_err();
        assert_eq!(err.code, error_codes::INVALID_PARAMS);

        let err = dispatcher.call_tool("yandex_disk_nope", None).await.unwrap_err();
        assert_eq!(err.code, error_codes::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: yandex_disk_nope");

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_metadata_is_byte_identical() {
        let (server, dispatcher) = test_dispatcher().await;

        Mock::given(method("GET"))
            .and(path("/resources"))
            .and(query_param("path", "/docs"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"name":"docs","type":"dir","path":"disk:/docs","_embedded":{"items":[]}}"#,
                "application/json",
            ))
            .expect(2)
            .mount(&server)
            .await;

        let call_args = args(json!({ "path": "/docs" }));
        let first = dispatcher
            .call_tool("yandex_disk_get_metadata", Some(&call_args))
            .await
            .unwrap();
        let second = dispatcher
            .call_tool("yandex_disk_get_metadata", Some(&call_args))
            .await
            .unwrap();

        assert_eq!(text_of(&first), text_of(&second));
        assert!(text_of(&first).starts_with("{\n  \"name\": \"docs\""));
    }
}

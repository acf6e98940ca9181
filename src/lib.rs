pub mod config;
pub mod disk;
pub mod mcp;
pub mod tools;

use config::DiskConfig;
use disk::DiskClient;
use log::info;
use mcp::MCPServer;
use tools::ToolDispatcher;

/// Wire the client, dispatcher and server together and serve stdio until EOF
pub async fn run(config: DiskConfig) -> anyhow::Result<()> {
    info!("Using Yandex.Disk endpoint {}", config.base_url());

    let dispatcher = ToolDispatcher::new(DiskClient::new(config));
    let server = MCPServer::new(dispatcher);
    server.run_stdio().await
}

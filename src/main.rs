use anyhow::Context;
use yandex_disk_mcp::config::DiskConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout carries protocol frames, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = DiskConfig::from_env().context("failed to load configuration")?;

    yandex_disk_mcp::run(config)
        .await
        .context("MCP server terminated with an error")
}

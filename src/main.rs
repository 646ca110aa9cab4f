use clap::Parser;
use redirector::config::{Cli, Config};
use redirector::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(cli)?;
    config.print_summary();

    server::run(config).await
}

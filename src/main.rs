use clap::Parser;
use gantt_docs::cli::{Cli, Commands, execute};
use gantt_docs::{Config, DocsServer, SiteState};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the MCP protocol or command output
    gantt_docs::tracing::init();

    let cli = Cli::parse();
    let state = SiteState::from_config(&Config::from_env())?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(state).await,
        command => {
            let output = execute(&state, command).map_err(anyhow::Error::msg)?;
            print!("{}", output);
            Ok(())
        }
    }
}

async fn serve(state: SiteState) -> anyhow::Result<()> {
    tracing::info!("Starting gantt-docs MCP server");

    let server = DocsServer::new(Arc::new(state));
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}

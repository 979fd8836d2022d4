use calculator_mcp::config::Config;
use calculator_mcp::handler::CalculatorServerHandler;
use calculator_mcp::notify::{forward_frames, ChannelScreen};
use calculator_mcp::session::Session;
use clap::Parser;
use rust_mcp_sdk::schema::{
    Implementation, InitializeResult, ServerCapabilities, ServerCapabilitiesTools,
    LATEST_PROTOCOL_VERSION,
};
use rust_mcp_sdk::{
    error::SdkResult,
    mcp_server::{server_runtime, McpServerOptions, ServerRuntime, ToMcpServerHandler},
    McpServer, StdioTransport, TransportOptions,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> SdkResult<()> {
    color_eyre::install().ok();
    env_logger::init();

    let config = Config::parse();

    log::info!("Calculator MCP Server starting");

    // Define server details and capabilities
    let server_details = InitializeResult {
        server_info: Implementation {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            title: Some("Calculator MCP Server".to_string()),
            description: None,
            icons: vec![],
            website_url: None,
        },
        capabilities: ServerCapabilities {
            tools: Some(ServerCapabilitiesTools { list_changed: None }),
            logging: Some(Default::default()),
            ..Default::default()
        },
        meta: None,
        instructions: Some(
            "A four-function calculator. Switch it on with 'AC' before entering numbers. Display changes are also sent as 'display' log messages.".to_string(),
        ),
        protocol_version: LATEST_PROTOCOL_VERSION.to_string(),
    };

    // Create stdio transport
    let transport = StdioTransport::new(TransportOptions::default())?;

    // Display frames flow through a channel to the notification forwarder
    let (frames_tx, frames_rx) = tokio::sync::mpsc::unbounded_channel();
    let screen = Arc::new(ChannelScreen::new(frames_tx));
    let session = Session::new(screen, config.status_duration());

    let handler = CalculatorServerHandler::new(session);

    // Create and start MCP server
    let server: Arc<ServerRuntime> =
        server_runtime::create_server(McpServerOptions {
            server_details,
            transport,
            handler: handler.to_mcp_server_handler(),
            task_store: None,
            client_task_store: None,
        });

    let forwarder = tokio::spawn(forward_frames(server.clone(), frames_rx));

    if let Err(start_error) = server.start().await {
        eprintln!(
            "{}",
            start_error
                .rpc_error_message()
                .unwrap_or(&start_error.to_string())
        );
    }

    forwarder.abort();

    log::info!("Calculator MCP Server stopping");

    Ok(())
}

//! MCP Server Handler Implementation
//!
//! Owns the calculator [`Session`] and routes tool calls to it. Calls are
//! applied one at a time, in the order the client sent them.

use async_trait::async_trait;
use rust_mcp_sdk::schema::{
    schema_utils::CallToolError, CallToolRequestParams, CallToolResult, ListToolsResult,
    PaginatedRequestParams, RpcError,
};
use rust_mcp_sdk::{mcp_server::ServerHandler, McpServer};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::session::Session;
use crate::tools::CalculatorTools;

pub struct CalculatorServerHandler {
    session: Mutex<Session>,
}

impl CalculatorServerHandler {
    pub fn new(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

#[async_trait]
impl ServerHandler for CalculatorServerHandler {
    async fn handle_list_tools_request(
        &self,
        _params: Option<PaginatedRequestParams>,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<ListToolsResult, RpcError> {
        Ok(ListToolsResult {
            tools: CalculatorTools::tools(),
            meta: None,
            next_cursor: None,
        })
    }

    async fn handle_call_tool_request(
        &self,
        params: CallToolRequestParams,
        _runtime: Arc<dyn McpServer>,
    ) -> Result<CallToolResult, CallToolError> {
        log::info!("Calling tool: {}", params.name);

        let tool: CalculatorTools = CalculatorTools::try_from(params)?;

        let mut session = self.session.lock().await;
        tool.call(&mut session)
    }
}

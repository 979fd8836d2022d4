//! MCP result types
//!
//! Re-exports the rust-mcp-sdk result types the tools build on.

pub use rust_mcp_sdk::schema::{CallToolResult, TextContent};

// Helper extension trait for CallToolResult
pub trait CallToolResultExt {
    fn success(text: String) -> Self;
    /// Tool-level failure the client should show to the user
    fn failure(text: String) -> Self;
}

impl CallToolResultExt for CallToolResult {
    fn success(text: String) -> Self {
        CallToolResult::text_content(vec![TextContent::from(text)])
    }

    fn failure(text: String) -> Self {
        CallToolResult {
            is_error: Some(true),
            ..Self::success(text)
        }
    }
}

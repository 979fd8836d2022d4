#![allow(dead_code)]

//! Helper functions for common test assertions

use calculator_mcp::mcp_types::CallToolResult;

pub fn assert_error_contains(err: &str, expected: &str, context: &str) {
    assert!(
        err.to_lowercase().contains(&expected.to_lowercase()),
        "{}: Error should contain '{}', got: {}",
        context,
        expected,
        err
    );
}

/// Assert that a tool call succeeded and shows `expected` on the display
pub fn assert_display(result: &CallToolResult, expected: &str) {
    assert_ne!(result.is_error, Some(true), "tool call failed: {result:?}");
    let body = super::result_body(result);
    assert_eq!(body["display"], expected, "unexpected reading: {body}");
}

/// Assert that a tool call came back as an error result
pub fn assert_tool_error(result: &CallToolResult, expected: &str) {
    assert_eq!(result.is_error, Some(true), "expected isError: {result:?}");
    let text = super::get_result_text(result);
    assert_error_contains(&text, expected, "tool error");
}

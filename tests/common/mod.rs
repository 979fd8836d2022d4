#![allow(dead_code)]

use calculator_mcp::display::Screen;
use calculator_mcp::engine::{CalculatorEngine, DigitToken, Operator};
use calculator_mcp::mcp_types::CallToolResult;
use calculator_mcp::session::{Session, DEFAULT_STATUS_DURATION};
use calculator_mcp::tools::CalculatorTools;
use rust_mcp_sdk::schema::schema_utils::CallToolError;
use rust_mcp_sdk::schema::CallToolRequestParams;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub mod helpers;

/// Screen that remembers every frame it was asked to render
#[derive(Default)]
pub struct RecordingScreen {
    frames: Mutex<Vec<String>>,
}

impl RecordingScreen {
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl Screen for RecordingScreen {
    fn render(&self, text: &str) {
        self.frames.lock().unwrap().push(text.to_string());
    }
}

pub fn digit(c: char) -> DigitToken {
    DigitToken::try_from(c).unwrap()
}

/// Engine that has already been switched on
pub fn powered_on_engine() -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    engine.toggle_power();
    engine
}

pub fn type_digits(engine: &mut CalculatorEngine, digits: &str) {
    for c in digits.chars() {
        engine.append_digit(digit(c));
    }
}

pub fn apply(engine: &mut CalculatorEngine, op: Operator) {
    engine.choose_operator(op).unwrap();
}

/// Session on a recording screen with the default status duration
pub fn recorded_session() -> (Session, Arc<RecordingScreen>) {
    let screen = Arc::new(RecordingScreen::default());
    let session = Session::new(screen.clone(), DEFAULT_STATUS_DURATION);
    (session, screen)
}

/// Resolve a tool by name the way the server does and run it on `session`
pub fn call_tool(
    session: &mut Session,
    name: &str,
    arguments: Value,
) -> Result<CallToolResult, CallToolError> {
    let params: CallToolRequestParams =
        serde_json::from_value(json!({ "name": name, "arguments": arguments })).unwrap();
    let tool = CalculatorTools::try_from(params)?;
    tool.call(session)
}

/// Helper to extract text from CallToolResult
pub fn get_result_text(result: &CallToolResult) -> String {
    if let Some(first_content) = result.content.first() {
        let json_val = serde_json::to_value(first_content).unwrap();
        json_val["text"].as_str().unwrap().to_string()
    } else {
        panic!("No content in result");
    }
}

/// Parse the JSON text inside a tool result
pub fn result_body(result: &CallToolResult) -> Value {
    serde_json::from_str(&get_result_text(result)).unwrap()
}

/// Press each button label in turn, returning the last result
pub fn press_all(session: &mut Session, labels: &[&str]) -> CallToolResult {
    let mut last = None;
    for label in labels {
        last = Some(call_tool(session, "press", json!({ "key": label })).unwrap());
    }
    last.expect("no labels pressed")
}

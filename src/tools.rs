//! MCP Tool definitions and implementations
//!
//! One tool per calculator action, plus `press` which takes a raw keypad
//! label. Every tool answers with the resulting [`Reading`] as JSON text.

use rust_mcp_sdk::macros::{mcp_tool, JsonSchema};
use rust_mcp_sdk::schema::{schema_utils::CallToolError, CallToolResult};
use rust_mcp_sdk::tool_box;
use serde_json::json;

use crate::engine::{DigitToken, Operator};
use crate::error::CalcError;
use crate::keypad::Key;
use crate::mcp_types::CallToolResultExt;
use crate::session::{Reading, Session};

/// Press a keypad button by its label
#[mcp_tool(
    name = "press",
    description = "Press a calculator button by its label. Digits '0'-'9' and '.', operators '+', '-', '*', '/' (also '×', '÷'), '=' to compute, 'C' to clear, '←' for backspace and 'AC' to toggle the power. Every button except 'AC' is ignored while the calculator is off."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct Press {
    /// Button label, e.g. "7", "+", "=" or "AC"
    pub key: String,
}

#[mcp_tool(
    name = "toggle_power",
    description = "Switch the calculator on or off. Either way everything entered so far is cleared and 'ON' or 'OFF' is shown briefly."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct TogglePower {}

#[mcp_tool(
    name = "append_digit",
    description = "Append a digit or the decimal point to the operand being typed. A second decimal point in the same operand is ignored."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct AppendDigit {
    /// A single character: '0'-'9' or '.'
    pub digit: String,
}

#[mcp_tool(
    name = "choose_operator",
    description = "Choose the operator to apply to the operand just entered. If an operator is already pending it is applied first (left to right, no precedence). Ignored when no operand has been typed yet."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct ChooseOperator {
    /// One of '+', '-', '*', '/' or 'add', 'subtract', 'multiply', 'divide'
    pub operator: String,
}

#[mcp_tool(
    name = "compute",
    description = "Apply the pending operator ('='). Does nothing when an operand is missing or no operator is pending. Dividing by zero returns an error result and clears the calculator."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct Compute {}

#[mcp_tool(
    name = "clear",
    description = "Clear both operands and the pending operator ('C')."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct Clear {}

#[mcp_tool(
    name = "backspace",
    description = "Delete the last character of the operand being typed ('←')."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct Backspace {}

#[mcp_tool(
    name = "read_display",
    description = "Return the current display text and power state without changing anything."
)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize, JsonSchema)]
pub struct ReadDisplay {}

impl Press {
    pub fn call_tool(&self, session: &mut Session) -> Result<CallToolResult, CallToolError> {
        let key: Key = self.key.parse().map_err(CallToolError::new)?;
        log::info!("Pressing {key}");

        let outcome = session.press(key);
        outcome_result(session, outcome)
    }
}

impl TogglePower {
    pub fn call_tool(&self, session: &mut Session) -> Result<CallToolResult, CallToolError> {
        let reading = session.toggle_power();
        outcome_result(session, Ok(reading))
    }
}

impl AppendDigit {
    pub fn call_tool(&self, session: &mut Session) -> Result<CallToolResult, CallToolError> {
        let token: DigitToken = self.digit.parse().map_err(CallToolError::new)?;

        let reading = session.append_digit(token);
        outcome_result(session, Ok(reading))
    }
}

impl ChooseOperator {
    pub fn call_tool(&self, session: &mut Session) -> Result<CallToolResult, CallToolError> {
        let op: Operator = self.operator.parse().map_err(CallToolError::new)?;

        let outcome = session.choose_operator(op);
        outcome_result(session, outcome)
    }
}

impl Compute {
    pub fn call_tool(&self, session: &mut Session) -> Result<CallToolResult, CallToolError> {
        let outcome = session.compute();
        outcome_result(session, outcome)
    }
}

impl Clear {
    pub fn call_tool(&self, session: &mut Session) -> Result<CallToolResult, CallToolError> {
        let reading = session.clear();
        outcome_result(session, Ok(reading))
    }
}

impl Backspace {
    pub fn call_tool(&self, session: &mut Session) -> Result<CallToolResult, CallToolError> {
        let reading = session.backspace();
        outcome_result(session, Ok(reading))
    }
}

impl ReadDisplay {
    pub fn call_tool(&self, session: &Session) -> Result<CallToolResult, CallToolError> {
        outcome_result(session, Ok(session.read()))
    }
}

/// Turn the outcome of a session action into a tool result
///
/// A division by zero becomes an error result carrying the notice and the
/// (cleared) display, so the client can tell the user without blocking.
fn outcome_result(
    session: &Session,
    outcome: Result<Reading, CalcError>,
) -> Result<CallToolResult, CallToolError> {
    match outcome {
        Ok(reading) => {
            let text = serde_json::to_string(&reading).map_err(CallToolError::new)?;
            Ok(CallToolResult::success(text))
        }
        Err(e) => {
            let reading = session.read();
            let body = json!({
                "error": e.to_string(),
                "display": reading.display,
                "power": reading.power,
            });
            Ok(CallToolResult::failure(body.to_string()))
        }
    }
}

// Generate an enum with all tools
tool_box!(
    CalculatorTools,
    [
        Press,
        TogglePower,
        AppendDigit,
        ChooseOperator,
        Compute,
        Clear,
        Backspace,
        ReadDisplay
    ]
);

impl CalculatorTools {
    /// Run the tool against `session`
    pub fn call(self, session: &mut Session) -> Result<CallToolResult, CallToolError> {
        match self {
            CalculatorTools::Press(t) => t.call_tool(session),
            CalculatorTools::TogglePower(t) => t.call_tool(session),
            CalculatorTools::AppendDigit(t) => t.call_tool(session),
            CalculatorTools::ChooseOperator(t) => t.call_tool(session),
            CalculatorTools::Compute(t) => t.call_tool(session),
            CalculatorTools::Clear(t) => t.call_tool(session),
            CalculatorTools::Backspace(t) => t.call_tool(session),
            CalculatorTools::ReadDisplay(t) => t.call_tool(session),
        }
    }
}

//! Calculator engine
//!
//! A four-function calculator driven one key at a time. The engine owns a
//! single [`CalculatorState`] and applies user actions to it; rendering and
//! timing are left to the caller (see [`crate::display`]).
//!
//! Every mutating operation is a no-op while the power is off.

mod token;


pub use token::{DigitToken, Operator, PowerStatus};

use crate::error::CalcError;

/// The full state of one calculator session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    power: bool,
    /// Operand being typed. Holds at most one decimal point.
    current_operand: String,
    /// Operand saved when an operator was chosen. Empty when nothing is pending.
    previous_operand: String,
    pending_operator: Option<Operator>,
}

impl CalculatorState {
    pub fn power(&self) -> bool {
        self.power
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// True when no operand or operator is held, regardless of power
    pub fn is_blank(&self) -> bool {
        self.current_operand.is_empty()
            && self.previous_operand.is_empty()
            && self.pending_operator.is_none()
    }

    fn reset(&mut self) {
        self.current_operand.clear();
        self.previous_operand.clear();
        self.pending_operator = None;
    }
}

/// Applies user actions to a [`CalculatorState`]
///
/// Operations that produce display text return `Some(text)`; `None` means the
/// action was absorbed (calculator off, duplicate decimal point, nothing to
/// compute) and the display should be left alone.
#[derive(Debug, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    /// Create an engine for a new session: powered off, nothing entered
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn is_on(&self) -> bool {
        self.state.power
    }

    /// Text the display should show for the current state (empty while off)
    pub fn display(&self) -> &str {
        if self.state.power {
            &self.state.current_operand
        } else {
            ""
        }
    }

    /// Flip the power, clearing every operand and the pending operator
    pub fn toggle_power(&mut self) -> PowerStatus {
        self.state.reset();
        self.state.power = !self.state.power;

        let status = if self.state.power {
            PowerStatus::On
        } else {
            PowerStatus::Off
        };
        log::info!("Calculator switched {status}");
        status
    }

    /// Append a digit or the decimal point to the operand being typed
    pub fn append_digit(&mut self, token: DigitToken) -> Option<&str> {
        if !self.state.power {
            log::debug!("Ignoring digit {token}: powered off");
            return None;
        }

        if token.is_point() && self.state.current_operand.contains('.') {
            log::debug!("Ignoring duplicate decimal point");
            return None;
        }

        self.state.current_operand.push(token.as_char());
        Some(self.state.current_operand.as_str())
    }

    /// Select the operator to apply to the operand just entered
    ///
    /// If an operator is already pending, it is applied first and the
    /// intermediate result is returned so it can be displayed.
    ///
    /// # Errors
    /// Returns [`CalcError::DivideByZero`] when the chained computation divides
    /// by zero. The state is cleared and `op` is not recorded.
    pub fn choose_operator(&mut self, op: Operator) -> Result<Option<String>, CalcError> {
        if !self.state.power {
            log::debug!("Ignoring operator {op}: powered off");
            return Ok(None);
        }

        if self.state.current_operand.is_empty() {
            log::debug!("Ignoring operator {op}: no operand entered");
            return Ok(None);
        }

        let mut chained = None;
        if !self.state.previous_operand.is_empty() {
            chained = self.compute()?.map(str::to_string);
        }

        self.state.pending_operator = Some(op);
        self.state.previous_operand = std::mem::take(&mut self.state.current_operand);
        Ok(chained)
    }

    /// Apply the pending operator to the previous and current operands
    ///
    /// Returns `Ok(None)` when there is nothing to compute: the calculator is
    /// off, an operand does not parse as a finite number, or no operator is
    /// pending. In those cases the state is untouched.
    ///
    /// # Errors
    /// Returns [`CalcError::DivideByZero`] when dividing by zero, after
    /// clearing the state.
    pub fn compute(&mut self) -> Result<Option<&str>, CalcError> {
        if !self.state.power {
            log::debug!("Ignoring compute: powered off");
            return Ok(None);
        }

        let (Some(previous), Some(current)) = (
            parse_operand(&self.state.previous_operand),
            parse_operand(&self.state.current_operand),
        ) else {
            log::debug!(
                "Nothing to compute: {:?} {:?}",
                self.state.previous_operand,
                self.state.current_operand
            );
            return Ok(None);
        };

        let Some(op) = self.state.pending_operator else {
            log::debug!("Nothing to compute: no pending operator");
            return Ok(None);
        };

        let result = match op {
            Operator::Add => previous + current,
            Operator::Subtract => previous - current,
            Operator::Multiply => previous * current,
            Operator::Divide => {
                if current == 0.0 {
                    log::warn!("Division by zero, clearing calculator");
                    self.state.reset();
                    return Err(CalcError::DivideByZero);
                }
                previous / current
            }
        };

        log::debug!("{previous} {op} {current} = {result}");

        self.state.current_operand = format_number(result);
        self.state.previous_operand.clear();
        self.state.pending_operator = None;
        Ok(Some(self.state.current_operand.as_str()))
    }

    /// Drop both operands and the pending operator
    pub fn clear(&mut self) -> Option<&str> {
        if !self.state.power {
            log::debug!("Ignoring clear: powered off");
            return None;
        }

        self.state.reset();
        Some(self.state.current_operand.as_str())
    }

    /// Remove the last character of the operand being typed
    pub fn backspace(&mut self) -> Option<&str> {
        if !self.state.power {
            log::debug!("Ignoring backspace: powered off");
            return None;
        }

        self.state.current_operand.pop();
        Some(self.state.current_operand.as_str())
    }
}

/// Parse an operand as a finite base-10 number
fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Render a result with the default float formatting
///
/// Negative zero is printed as `0`.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

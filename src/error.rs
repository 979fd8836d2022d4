//! Error types
//!
//! Only conditions a caller has to react to are represented here. Keys
//! pressed while the calculator is off, duplicate decimal points and
//! unparseable operands are absorbed by the engine and never surface.

use thiserror::Error;

/// Failures surfaced by the calculator engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The divisor was exactly zero. The engine clears itself before returning this.
    #[error("Can't divide by zero!")]
    DivideByZero,
}

/// Rejections at the input boundary, raised before anything reaches the engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Unknown key: {0:?}")]
    Unknown(String),
    #[error("Not a digit or decimal point: {0:?}")]
    NotADigit(String),
    #[error("Not an operator: {0:?}")]
    NotAnOperator(String),
}

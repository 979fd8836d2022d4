use crate::error::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arithmetic operators the calculator understands
///
/// There is no precedence: a pending operator is applied as soon as the
/// next operator is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// Symbol printed on the keypad button
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Word form, as accepted by the `choose_operator` tool
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = KeyError;

    /// Accepts the keypad symbols (including `×` and `÷`) and the word forms,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "−" | "subtract" => Ok(Operator::Subtract),
            "*" | "×" | "x" | "multiply" => Ok(Operator::Multiply),
            "/" | "÷" | "divide" => Ok(Operator::Divide),
            _ => Err(KeyError::NotAnOperator(s.to_string())),
        }
    }
}

/// A single validated digit-entry token: `0`-`9` or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitToken(char);

impl DigitToken {
    pub const POINT: DigitToken = DigitToken('.');

    /// Digit token for `0..=9`
    pub fn digit(value: u8) -> Option<Self> {
        char::from_digit(u32::from(value), 10).map(DigitToken)
    }

    pub fn is_point(&self) -> bool {
        self.0 == '.'
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for DigitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for DigitToken {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() || c == '.' {
            Ok(DigitToken(c))
        } else {
            Err(KeyError::NotADigit(c.to_string()))
        }
    }
}

impl FromStr for DigitToken {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => DigitToken::try_from(c),
            _ => Err(KeyError::NotADigit(s.to_string())),
        }
    }
}

/// Transient status shown after the power key is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerStatus {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl PowerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerStatus::On => "ON",
            PowerStatus::Off => "OFF",
        }
    }
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

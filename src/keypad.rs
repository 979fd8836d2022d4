//! Keypad input
//!
//! Maps button labels to the closed set of [`Key`]s the session understands.
//! Anything that is not a known label is rejected here, so the engine only
//! ever sees validated digits and operators.

use crate::engine::{DigitToken, Operator};
use crate::error::KeyError;
use std::fmt;
use std::str::FromStr;

/// A calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `AC`: toggles the power
    Power,
    /// `0`-`9` or `.`
    Digit(DigitToken),
    /// `+`, `-`, `*`, `/`
    Operator(Operator),
    /// `=`
    Equals,
    /// `C`
    Clear,
    /// `←`
    Backspace,
}

impl Key {
    /// Canonical button label
    pub fn label(&self) -> String {
        match self {
            Key::Power => "AC".to_string(),
            Key::Digit(token) => token.to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
            Key::Clear => "C".to_string(),
            Key::Backspace => "←".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        match label {
            "AC" => return Ok(Key::Power),
            "C" => return Ok(Key::Clear),
            "=" => return Ok(Key::Equals),
            "←" | "⌫" | "backspace" => return Ok(Key::Backspace),
            _ => {}
        }

        if let Ok(token) = label.parse::<DigitToken>() {
            return Ok(Key::Digit(token));
        }

        label
            .parse::<Operator>()
            .map(Key::Operator)
            .map_err(|_| KeyError::Unknown(s.to_string()))
    }
}

impl From<DigitToken> for Key {
    fn from(token: DigitToken) -> Self {
        Key::Digit(token)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Key::Operator(op)
    }
}

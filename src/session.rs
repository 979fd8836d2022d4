//! Calculator session
//!
//! Wires one [`CalculatorEngine`] to one [`DisplayAdapter`]. Every key press
//! goes through here: the engine is updated, then the screen is refreshed
//! when the action produced new display text.

use crate::display::{DisplayAdapter, Screen};
use crate::engine::{CalculatorEngine, DigitToken, Operator, PowerStatus};
use crate::error::CalcError;
use crate::keypad::Key;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// How long "ON"/"OFF" stays on screen after a power toggle
pub const DEFAULT_STATUS_DURATION: Duration = Duration::from_secs(5);

/// What the caller gets back after each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// Engine display text (empty while off)
    pub display: String,
    /// Whether the calculator is on
    pub power: bool,
    /// Transient status flashed by this action, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PowerStatus>,
}

pub struct Session {
    engine: CalculatorEngine,
    display: DisplayAdapter,
    status_duration: Duration,
}

impl Session {
    pub fn new(screen: Arc<dyn Screen>, status_duration: Duration) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            display: DisplayAdapter::new(screen),
            status_duration,
        }
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Handle a keypad button
    ///
    /// Apart from the power key, buttons do nothing while the calculator is off.
    pub fn press(&mut self, key: Key) -> Result<Reading, CalcError> {
        log::debug!("Key pressed: {key}");

        if key != Key::Power && !self.engine.is_on() {
            log::debug!("Ignoring {key}: calculator is off");
            return Ok(self.reading(None));
        }

        match key {
            Key::Power => Ok(self.toggle_power()),
            Key::Digit(token) => Ok(self.append_digit(token)),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.compute(),
            Key::Clear => Ok(self.clear()),
            Key::Backspace => Ok(self.backspace()),
        }
    }

    pub fn toggle_power(&mut self) -> Reading {
        let status = self.engine.toggle_power();
        let revert_to = self.engine.display().to_string();
        self.display
            .flash(status.as_str(), self.status_duration, revert_to);
        self.reading(Some(status))
    }

    pub fn append_digit(&mut self, token: DigitToken) -> Reading {
        if let Some(text) = self.engine.append_digit(token) {
            self.display.show(text);
        }
        self.reading(None)
    }

    pub fn choose_operator(&mut self, op: Operator) -> Result<Reading, CalcError> {
        match self.engine.choose_operator(op) {
            Ok(Some(intermediate)) => self.display.show(&intermediate),
            Ok(None) => {}
            Err(e) => return Err(self.recover(e)),
        }
        Ok(self.reading(None))
    }

    pub fn compute(&mut self) -> Result<Reading, CalcError> {
        match self.engine.compute() {
            Ok(Some(text)) => self.display.show(text),
            Ok(None) => {}
            Err(e) => return Err(self.recover(e)),
        }
        Ok(self.reading(None))
    }

    pub fn clear(&mut self) -> Reading {
        if let Some(text) = self.engine.clear() {
            self.display.show(text);
        }
        self.reading(None)
    }

    pub fn backspace(&mut self) -> Reading {
        if let Some(text) = self.engine.backspace() {
            self.display.show(text);
        }
        self.reading(None)
    }

    /// Current display without changing anything
    pub fn read(&self) -> Reading {
        self.reading(None)
    }

    /// The engine has already cleared itself; bring the screen in line
    fn recover(&mut self, error: CalcError) -> CalcError {
        log::warn!("{error}");
        self.display.show(self.engine.display());
        error
    }

    fn reading(&self, status: Option<PowerStatus>) -> Reading {
        Reading {
            display: self.engine.display().to_string(),
            power: self.engine.is_on(),
            status,
        }
    }
}

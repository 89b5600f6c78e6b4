//! Live recomputation: an input model paired with its derived result.
//!
//! Every mutation goes through a setter that re-derives the full result
//! before returning, so `result()` always reflects `input()`.

use crate::calculator::{CalcError, Calculator};
use crate::fields::InputModel;

/// An editable input model whose result is re-derived on every change.
pub struct LiveCalculation<C: Calculator> {
    calculator: C,
    input: C::Input,
    result: C::Output,
}

impl<C> LiveCalculation<C>
where
    C: Calculator,
    C::Input: InputModel,
{
    /// Start from the default sample input.
    pub fn new(calculator: C) -> Self {
        Self::with_input(calculator, C::Input::default())
    }

    /// Start from the given input.
    pub fn with_input(calculator: C, input: C::Input) -> Self {
        let result = calculator.derive(&input);
        Self {
            calculator,
            input,
            result,
        }
    }

    /// Current input.
    pub fn input(&self) -> &C::Input {
        &self.input
    }

    /// Result derived from the current input.
    pub fn result(&self) -> &C::Output {
        &self.result
    }

    /// Name of the underlying calculator.
    pub fn name(&self) -> &str {
        self.calculator.name()
    }

    /// Set one field and re-derive.
    pub fn set(&mut self, key: &str, value: f64) -> Result<&C::Output, CalcError> {
        self.input.set(key, value)?;
        Ok(self.recompute(key))
    }

    /// Parse `text` into one field and re-derive.
    pub fn set_text(&mut self, key: &str, text: &str) -> Result<&C::Output, CalcError> {
        self.input.set_text(key, text)?;
        Ok(self.recompute(key))
    }

    /// Add `delta` to one field and re-derive.
    pub fn step(&mut self, key: &str, delta: f64) -> Result<&C::Output, CalcError> {
        let current = self
            .input
            .get(key)
            .ok_or_else(|| CalcError::UnknownField(key.to_string()))?;
        self.set(key, round_step(current + delta))
    }

    /// Replace the whole input and re-derive.
    pub fn replace(&mut self, input: C::Input) -> &C::Output {
        self.input = input;
        self.recompute("*")
    }

    /// Restore the default sample input.
    pub fn reset(&mut self) -> &C::Output {
        self.replace(C::Input::default())
    }

    fn recompute(&mut self, changed: &str) -> &C::Output {
        self.result = self.calculator.derive(&self.input);
        tracing::debug!(calculator = self.calculator.name(), field = changed, "recomputed");
        &self.result
    }
}

/// Trim binary noise from repeated decimal steps (e.g. 0.1 + 0.2).
fn round_step(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

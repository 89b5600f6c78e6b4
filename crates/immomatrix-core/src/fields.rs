//! Named numeric fields of an input model.
//!
//! Both calculators expose their inputs as a flat list of named `f64`
//! fields so that front ends (CLI flags, TUI forms) can edit them
//! generically.

use serde::Serialize;

use crate::calculator::CalcError;

/// Unit of an input field, used for display and step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Swiss francs.
    Chf,
    /// Plain count.
    Count,
    /// Months.
    Months,
    /// Percent.
    Percent,
}

impl Unit {
    /// Short suffix shown next to a value.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Chf => "CHF",
            Unit::Count => "",
            Unit::Months => "Mt",
            Unit::Percent => "%",
        }
    }
}

/// Static description of one input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Machine name, e.g. `monthly_rent_per_unit`.
    pub key: &'static str,
    /// German label shown to the user.
    pub label: &'static str,
    /// Secondary label (qualifier).
    pub hint: &'static str,
    /// Unit of the value.
    pub unit: Unit,
    /// Increment used by stepping controls.
    pub step: f64,
}

/// An input model made of named numeric fields.
pub trait InputModel: Clone + Default {
    /// Field descriptions, in display order.
    fn fields() -> &'static [FieldSpec];

    /// Read a field by key.
    fn get(&self, key: &str) -> Option<f64>;

    /// Write a field by key. The value is stored unvalidated.
    fn set(&mut self, key: &str, value: f64) -> Result<(), CalcError>;

    /// Look up a field description by key.
    fn field(key: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.key == key)
    }

    /// Parse `text` and write it to the field `key`.
    fn set_text(&mut self, key: &str, text: &str) -> Result<(), CalcError> {
        let value = parse_number(key, text)?;
        self.set(key, value)
    }
}

/// Parse a user-entered number.
///
/// Accepts a comma as decimal separator and Swiss thousands separators
/// (`'` or `’`). An empty string reads as zero, like an emptied number
/// input.
pub fn parse_number(field: &str, text: &str) -> Result<f64, CalcError> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\'' | '’' | '_'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Ok(0.0);
    }

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::InvalidNumber {
            field: field.to_string(),
            value: text.to_string(),
        })
}

//! The `Calculator` trait and the calculator error type.
//!
//! A calculator is a pure derivation from an input model to a result
//! model. Derivations never fail; `CalcError` only covers editing and
//! parsing of input fields.

/// Error type for input editing and configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// The named field does not exist on the input model.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The entered text is not a number.
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A pure derivation from an input model to a result model.
///
/// Implementations must be deterministic: deriving twice from the same
/// input yields bit-identical output.
pub trait Calculator: Send + Sync {
    /// Input model consumed by the derivation.
    type Input;
    /// Result model produced by the derivation.
    type Output;

    /// Derive the result from the input.
    fn derive(&self, input: &Self::Input) -> Self::Output;

    /// Display name of this calculator.
    fn name(&self) -> &str;
}

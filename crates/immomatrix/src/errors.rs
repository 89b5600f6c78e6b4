//! Error handling and exit codes.

use immomatrix_core::constants::exit_codes;
use immomatrix_core::CalcError;

/// Exit code for a calculator input error.
#[must_use]
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::UnknownField(_) | CalcError::InvalidNumber { .. } | CalcError::Config(_) => {
            exit_codes::ERROR_CONFIG
        }
    }
}

/// Exit code for any error returned by `app::run`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CalcError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

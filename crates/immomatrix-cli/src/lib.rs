//! # immomatrix-cli
//!
//! CLI output, result presenters, draft spinner, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod ui;

pub use presenter::{CLIResultPresenter, JsonResultPresenter, ResultPresenter};
pub use progress::DraftSpinner;

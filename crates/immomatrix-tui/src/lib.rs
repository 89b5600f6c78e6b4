//! # immomatrix-tui
//!
//! Interactive three-view calculator dashboard using ratatui with Elm
//! architecture.

pub mod bridge;
pub mod chart;
pub mod dashboard;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod results;
pub mod styles;

pub use bridge::spawn_draft_worker;
pub use logs::LogBuffer;
pub use messages::{TuiMessage, View};
pub use model::TuiApp;

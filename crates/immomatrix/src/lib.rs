//! ImmoMatrix library: argument model and command dispatch for the
//! `immomatrix` binary.

pub mod app;
pub mod config;
pub mod errors;

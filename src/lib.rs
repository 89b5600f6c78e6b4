//! Workspace-level integration tests for ImmoMatrix.
//!
//! The calculators live in `crates/`; this package only hosts the golden
//! scenario tests under `tests/`.

//! Workspace-level scenario tests for the Oersted teaching aid.
//!
//! This crate has no code of its own; the scenarios in `tests/` drive the
//! public APIs of `oersted-core` and `oersted-tui` together.

//! Oersted teaching aid library: configuration, dispatch and exit codes.

pub mod app;
pub mod config;
pub mod errors;

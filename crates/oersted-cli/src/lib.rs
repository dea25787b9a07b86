//! # oersted-cli
//!
//! Headless presentation of field snapshots and the question bank, styled
//! terminal messages, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CliPresenter;

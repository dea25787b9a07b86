//! # oersted-tui
//!
//! Interactive terminal rendition of the electromagnetism demos, using
//! ratatui with Elm architecture.

pub mod compass;
pub mod footer;
pub mod gauge;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod pattern;
pub mod quiz;
pub mod styles;

pub use keymap::KeyAction;
pub use logs::LogScrollState;
pub use messages::TuiMessage;
pub use model::TuiApp;

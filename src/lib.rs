//! Inline Edit - Elm-style edit-in-place controller
//!
//! This crate provides the core types and logic for displaying one piece of
//! text in a read view and editing it in place, folding clicks, keys, buttons
//! and focus loss into a single edit/submit/cancel lifecycle.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dismiss;
pub mod editable;
pub mod input;
pub mod scenario;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditableConfig;
pub use editable::{Editable, EditableContext, EditableMsg};
pub use update::update;

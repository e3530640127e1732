//! gridpad - Elm-style text editor with a text to table converter
//!
//! This crate provides the core types and logic for a small text editor
//! implementing the Elm Architecture pattern. Its centerpiece is the
//! conversion between delimited text and a rectangular table in [`grid`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use grid::{grid_to_text, text_to_grid, Grid};
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;

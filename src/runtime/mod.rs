//! Runtime module - the interactive front end
//!
//! - `app` - the read/update/render loop and command execution
//! - `input` - prompt line to message mapping

pub mod app;
pub mod input;

pub use app::App;

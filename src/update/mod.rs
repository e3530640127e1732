//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod file;
mod grid;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::sync_status_bar;
use crate::model::AppModel;

pub use app::{update_app, ABOUT_TEXT};
pub use document::update_document;
pub use file::update_file;
pub use grid::update_grid;

/// Main update function - dispatches to sub-handlers
///
/// Highlights and the status bar are refreshed after every message.
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let result = match msg {
        Msg::File(m) => file::update_file(model, m),
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::App(m) => app::update_app(model, m),
    };

    model.refresh_highlights();
    sync_status_bar(model);
    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Grid::ConvertToTable(",")`
/// - `App::Resize(1920, 1080)`
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::File(m) => format!("File::{:?}", m),
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{AppMsg, GridMsg};

    #[test]
    fn test_msg_type_name() {
        assert_eq!(
            msg_type_name(&Msg::Grid(GridMsg::ShowText)),
            "Grid::ShowText"
        );
        assert_eq!(
            msg_type_name(&Msg::App(AppMsg::Resize(10, 20))),
            "App::Resize(10, 20)"
        );
    }
}

//! App message handlers (exit, themes, console, window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::theme::Color;

/// Text shown by About
pub const ABOUT_TEXT: &str = concat!(
    "gridpad ",
    env!("CARGO_PKG_VERSION"),
    " - text editor with delimited text to table conversion"
);

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Exit => {
            let save = model.location.config_file.clone().map(|path| Cmd::SaveConfig {
                path,
                config: model.config.clone(),
            });
            match save {
                Some(save) => Some(Cmd::batch(vec![save, Cmd::Quit])),
                None => Some(Cmd::Quit),
            }
        }

        AppMsg::ToggleConsole => {
            let visible = model.ui.toggle_console();
            tracing::debug!("Console visible: {}", visible);
            Some(Cmd::Redraw)
        }

        AppMsg::ReloadThemes => {
            model.reload_themes();
            model
                .ui
                .set_status(format!("{} themes available", model.available_themes.len()));
            Some(Cmd::Redraw)
        }

        AppMsg::PickColor(hex) => {
            // Empty input means the picker was dismissed
            if hex.trim().is_empty() {
                return None;
            }
            match Color::from_hex(hex.trim()) {
                Ok(color) => model.ui.set_status(format!("Color: {}", color.to_hex())),
                Err(e) => model.ui.set_status(format!("Error: {}", e)),
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SwitchTheme(id) => match model.load_theme(&id) {
            Ok(theme) => {
                model.ui.set_status(format!("Theme: {}", theme.name));
                model.theme = theme;
                model.config.set_theme(&id);
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::warn!("Failed to load theme '{}': {}", id, e);
                model.ui.set_status(format!("Error: {}", e));
                Some(Cmd::Redraw)
            }
        },

        AppMsg::About => {
            model.ui.set_status(ABOUT_TEXT);
            Some(Cmd::Redraw)
        }

        AppMsg::Resize(width, height) => {
            model.config.window.width = width;
            model.config.window.height = height;
            Some(Cmd::Redraw)
        }

        AppMsg::Move(x, y) => {
            model.config.window.x = x;
            model.config.window.y = y;
            None
        }

        AppMsg::SaveCompleted { path, result } => {
            model.ui.is_saving = false;
            // Exports also complete here; only a document save has a pending entry
            let pending = model
                .ui
                .pending_save
                .take()
                .filter(|pending| pending.path == path);
            match result {
                Ok(()) => {
                    if let Some(pending) = pending {
                        model.document.mark_saved(pending.path, &pending.content);
                    }
                    model.ui.set_status(format!("Saved: {}", path.display()));
                }
                Err(e) => {
                    tracing::error!("Failed to save {}: {}", path.display(), e);
                    model.ui.set_status(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::ConfigSaved(result) => {
            if let Err(e) = result {
                tracing::warn!("Failed to save config: {}", e);
                model.ui.set_status(format!("Error: {}", e));
            }
            None
        }
    }
}

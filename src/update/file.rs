//! File menu handlers (new, open, save)

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::commands::Cmd;
use crate::messages::FileMsg;
use crate::model::{AppModel, Document, PendingSave, ViewMode};

/// Handle file messages
pub fn update_file(model: &mut AppModel, msg: FileMsg) -> Option<Cmd> {
    match msg {
        FileMsg::New => {
            model.document = Document::new();
            model.view_mode = ViewMode::Text;
            model.ui.set_status("New file");
            Some(Cmd::Redraw)
        }

        FileMsg::Open(path) => open_file(model, path),

        FileMsg::Save(path) => save_file(model, path),
    }
}

fn open_file(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    // Empty path means the prompt was cancelled
    if path.as_os_str().is_empty() {
        return None;
    }

    match Document::from_file(path.clone()) {
        Ok(doc) => {
            model.document = doc;
            model.view_mode = ViewMode::Text;
            let status = match model.config.file_type(&path) {
                Some(label) => {
                    tracing::debug!("Opened {} as {}", path.display(), label);
                    format!("Loaded: {}", path.display())
                }
                None => {
                    tracing::warn!("{} matches no configured open type", path.display());
                    format!("Loaded: {} (unlisted file type)", path.display())
                }
            };
            model.ui.set_status(status);
            Some(Cmd::Redraw)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Open skipped, {} does not exist", path.display());
            None
        }
        Err(e) => {
            tracing::error!("Failed to open {}: {}", path.display(), e);
            model
                .ui
                .set_status(format!("Error opening {}: {}", path.display(), e));
            Some(Cmd::Redraw)
        }
    }
}

fn save_file(model: &mut AppModel, path: Option<PathBuf>) -> Option<Cmd> {
    let path = path
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| model.document.file_path.clone());
    // No path means the prompt was cancelled
    let path = path?;

    let content = model
        .document
        .text_for_save(model.config.expand_tabs_on_save);

    // The document is only rebound once the write succeeds
    model.ui.pending_save = Some(PendingSave {
        path: path.clone(),
        content: content.clone(),
    });
    model.ui.is_saving = true;
    model.ui.set_status("Saving...");
    Some(Cmd::WriteFile { path, content })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigLocation;

    fn test_model() -> AppModel {
        AppModel::with_location(ConfigLocation::default(), None)
    }

    #[test]
    fn test_open_empty_path_is_cancelled() {
        let mut model = test_model();
        model.document = Document::with_text("keep\n");
        let cmd = update_file(&mut model, FileMsg::Open(PathBuf::new()));
        assert!(cmd.is_none());
        assert_eq!(model.document.text(), "keep\n");
    }

    #[test]
    fn test_save_without_path_is_cancelled() {
        let mut model = test_model();
        assert!(update_file(&mut model, FileMsg::Save(None)).is_none());
        assert!(!model.ui.is_saving);
    }

    #[test]
    fn test_save_expands_tabs() {
        let mut model = test_model();
        model.document = Document::with_text("a\tb\n");
        let cmd = update_file(&mut model, FileMsg::Save(Some(PathBuf::from("out.txt"))));
        assert_eq!(
            cmd,
            Some(Cmd::WriteFile {
                path: PathBuf::from("out.txt"),
                content: "a    b\n".to_string(),
            })
        );
        // Nothing changes until the write completes
        assert_eq!(model.document.text(), "a\tb\n");
        assert_eq!(model.document.file_path, None);
        assert_eq!(
            model.ui.pending_save,
            Some(PendingSave {
                path: PathBuf::from("out.txt"),
                content: "a    b\n".to_string(),
            })
        );
    }

    #[test]
    fn test_save_keeps_tabs_when_disabled() {
        let mut model = test_model();
        model.config.expand_tabs_on_save = false;
        model.document = Document::with_text("a\tb\n");
        let cmd = update_file(&mut model, FileMsg::Save(Some(PathBuf::from("out.txt"))));
        assert!(matches!(
            cmd,
            Some(Cmd::WriteFile { ref content, .. }) if content == "a\tb\n"
        ));
    }
}

//! Document editing handlers

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertText(text) => {
            model.document.append(&text);
            Some(Cmd::Redraw)
        }

        DocumentMsg::SetLine { line, text } => {
            if !model.document.replace_line(line, &text) {
                model.ui.set_status(format!("No line {}", line + 1));
            }
            Some(Cmd::Redraw)
        }

        DocumentMsg::DeleteLine(line) => {
            if !model.document.delete_line(line) {
                model.ui.set_status(format!("No line {}", line + 1));
            }
            Some(Cmd::Redraw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfigLocation, Document};

    #[test]
    fn test_edits_change_line_count() {
        let mut model = AppModel::with_location(ConfigLocation::default(), None);
        model.document = Document::with_text("one\n");

        update_document(&mut model, DocumentMsg::InsertText("two\nthree\n".into()));
        assert_eq!(model.document.line_count(), 3);

        update_document(
            &mut model,
            DocumentMsg::SetLine {
                line: 1,
                text: "TWO".into(),
            },
        );
        assert_eq!(model.document.get_line(1).as_deref(), Some("TWO"));

        update_document(&mut model, DocumentMsg::DeleteLine(0));
        assert_eq!(model.document.text(), "TWO\nthree\n");
    }

    #[test]
    fn test_missing_line_reports_status() {
        let mut model = AppModel::with_location(ConfigLocation::default(), None);
        update_document(&mut model, DocumentMsg::DeleteLine(9));
        assert_eq!(model.ui.status_message, "No line 10");
    }
}

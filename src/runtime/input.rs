//! Prompt input handling
//!
//! Maps a line typed at the prompt to a message. Menu commands are looked up
//! in the [`COMMANDS`](crate::commands::COMMANDS) registry by name; cell and
//! line editing commands are handled here directly.

use std::path::PathBuf;

use crate::cli::unescape_delimiter;
use crate::commands::{find_command, CommandId};
use crate::messages::{AppMsg, DocumentMsg, FileMsg, GridMsg, Msg};
use crate::model::AppModel;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Run a message through update
    Msg(Msg),
    /// Print the command list
    Help,
    /// List the available themes
    Themes,
    /// List the configured open types
    OpenTypes,
    /// Blank line
    Empty,
}

/// Split a line into the command word and its raw argument
///
/// Only the single space after the command word is removed, so a delimiter
/// argument may itself be a space.
fn split_command(line: &str) -> (&str, Option<&str>) {
    let line = line.trim_end_matches(['\r', '\n']);
    let line = line.trim_start();
    match line.split_once(' ') {
        Some((name, arg)) => (name, Some(arg)),
        None => (line, None),
    }
}

fn parse_index(value: &str, what: &str) -> Result<usize, String> {
    let n: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid {}: {}", what, value.trim()))?;
    // Prompt indices are 1-based
    n.checked_sub(1)
        .ok_or_else(|| format!("Invalid {}: {}", what, n))
}

fn path_arg(arg: Option<&str>) -> PathBuf {
    PathBuf::from(arg.map(str::trim).unwrap_or(""))
}

/// Parse one line of prompt input
pub fn parse_input(line: &str, model: &AppModel) -> Result<Input, String> {
    let (name, arg) = split_command(line);
    if name.is_empty() {
        return Ok(Input::Empty);
    }

    let msg = match name {
        "help" | "?" => return Ok(Input::Help),
        "themes" => return Ok(Input::Themes),
        // Without a path, show what the open prompt accepts
        "open" if arg.map_or(true, |a| a.trim().is_empty()) => return Ok(Input::OpenTypes),
        "append" => Msg::Document(DocumentMsg::InsertText(format!(
            "{}\n",
            arg.unwrap_or("")
        ))),
        "set" => {
            let (line_no, text) = arg
                .and_then(|a| a.split_once(' '))
                .ok_or("Usage: set LINE TEXT")?;
            Msg::Document(DocumentMsg::SetLine {
                line: parse_index(line_no, "line")?,
                text: text.to_string(),
            })
        }
        "delete" => Msg::Document(DocumentMsg::DeleteLine(parse_index(
            arg.ok_or("Usage: delete LINE")?,
            "line",
        )?)),
        "select" => {
            let mut parts = arg.unwrap_or("").split_whitespace();
            let (Some(row), Some(col)) = (parts.next(), parts.next()) else {
                return Err("Usage: select ROW COL".to_string());
            };
            Msg::Grid(GridMsg::SelectCell {
                row: parse_index(row, "row")?,
                col: parse_index(col, "column")?,
            })
        }
        "cell" => {
            let usage = "Usage: cell ROW COL VALUE";
            let (row, rest) = arg.and_then(|a| a.split_once(' ')).ok_or(usage)?;
            let (col, value) = rest.split_once(' ').unwrap_or((rest, ""));
            Msg::Grid(GridMsg::SetCell {
                row: parse_index(row, "row")?,
                col: parse_index(col, "column")?,
                value: value.to_string(),
            })
        }
        "resize" | "move" => {
            let mut parts = arg.unwrap_or("").split_whitespace();
            let (Some(a), Some(b)) = (parts.next(), parts.next()) else {
                return Err(format!("Usage: {} A B", name));
            };
            if name == "resize" {
                let w = a.parse().map_err(|_| format!("Invalid width: {}", a))?;
                let h = b.parse().map_err(|_| format!("Invalid height: {}", b))?;
                Msg::App(AppMsg::Resize(w, h))
            } else {
                let x = a.parse().map_err(|_| format!("Invalid x: {}", a))?;
                let y = b.parse().map_err(|_| format!("Invalid y: {}", b))?;
                Msg::App(AppMsg::Move(x, y))
            }
        }
        _ => {
            let def = find_command(name).ok_or_else(|| format!("Unknown command: {}", name))?;
            menu_message(def.id, arg, model)
        }
    };

    Ok(Input::Msg(msg))
}

fn menu_message(id: CommandId, arg: Option<&str>, model: &AppModel) -> Msg {
    match id {
        CommandId::NewFile => Msg::File(FileMsg::New),
        CommandId::OpenFile => Msg::File(FileMsg::Open(path_arg(arg))),
        CommandId::SaveFile => Msg::File(FileMsg::Save(
            arg.map(str::trim)
                .filter(|a| !a.is_empty())
                .map(PathBuf::from),
        )),
        CommandId::Exit => Msg::App(AppMsg::Exit),
        CommandId::ShowText => Msg::Grid(GridMsg::ShowText),
        CommandId::ShowTable => Msg::Grid(GridMsg::ShowTable),
        CommandId::ConvertToTable => {
            Msg::convert_to_table(unescape_delimiter(arg.unwrap_or("")))
        }
        CommandId::ConvertToText => {
            // Without an argument, join with the delimiter the table was built with
            let delimiter = match arg {
                Some(arg) => unescape_delimiter(arg),
                None => model.grid.delimiter.clone().unwrap_or_default(),
            };
            Msg::convert_to_text(delimiter)
        }
        CommandId::ToggleConsole => Msg::App(AppMsg::ToggleConsole),
        CommandId::ImportCsv => Msg::Grid(GridMsg::ImportCsv(path_arg(arg))),
        CommandId::ExportCsv => Msg::Grid(GridMsg::ExportCsv(path_arg(arg))),
        CommandId::ReloadThemes => Msg::App(AppMsg::ReloadThemes),
        CommandId::ColorPicker => Msg::App(AppMsg::PickColor(arg.unwrap_or("").to_string())),
        CommandId::SwitchTheme => {
            Msg::App(AppMsg::SwitchTheme(arg.unwrap_or("").trim().to_string()))
        }
        CommandId::About => Msg::App(AppMsg::About),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigLocation;

    fn parse(line: &str) -> Result<Input, String> {
        let model = AppModel::with_location(ConfigLocation::default(), None);
        parse_input(line, &model)
    }

    #[test]
    fn test_menu_commands() {
        assert_eq!(parse("new"), Ok(Input::Msg(Msg::File(FileMsg::New))));
        assert_eq!(parse("open a.txt"), Ok(Input::Msg(Msg::open("a.txt"))));
        assert_eq!(parse("open"), Ok(Input::OpenTypes));
        assert_eq!(parse("open  "), Ok(Input::OpenTypes));
        assert_eq!(
            parse("save"),
            Ok(Input::Msg(Msg::File(FileMsg::Save(None))))
        );
        assert_eq!(parse("exit"), Ok(Input::Msg(Msg::App(AppMsg::Exit))));
    }

    #[test]
    fn test_delimiter_argument_keeps_spaces() {
        assert_eq!(
            parse("to-table  "),
            Ok(Input::Msg(Msg::convert_to_table(" ")))
        );
        assert_eq!(
            parse("to-table \\t"),
            Ok(Input::Msg(Msg::convert_to_table("\t")))
        );
        assert_eq!(parse("to-table"), Ok(Input::Msg(Msg::convert_to_table(""))));
    }

    #[test]
    fn test_to_text_defaults_to_table_delimiter() {
        let mut model = AppModel::with_location(ConfigLocation::default(), None);
        model.grid.delimiter = Some(";".into());
        assert_eq!(
            parse_input("to-text", &model),
            Ok(Input::Msg(Msg::convert_to_text(";")))
        );
        assert_eq!(
            parse_input("to-text ,", &model),
            Ok(Input::Msg(Msg::convert_to_text(",")))
        );
    }

    #[test]
    fn test_editing_commands_are_one_based() {
        assert_eq!(
            parse("set 2 hello world"),
            Ok(Input::Msg(Msg::Document(DocumentMsg::SetLine {
                line: 1,
                text: "hello world".into()
            })))
        );
        assert_eq!(
            parse("cell 1 2 x y"),
            Ok(Input::Msg(Msg::Grid(GridMsg::SetCell {
                row: 0,
                col: 1,
                value: "x y".into()
            })))
        );
        assert!(parse("delete 0").is_err());
        assert!(parse("select 1").is_err());
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(parse("   "), Ok(Input::Empty));
        assert_eq!(parse("help"), Ok(Input::Help));
        assert!(parse("frobnicate").unwrap_err().contains("Unknown command"));
    }
}

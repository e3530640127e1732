//! Application loop - reads prompt input, runs updates, executes commands
//!
//! Everything runs on the calling thread: a command's completion message is
//! dispatched before the next line of input is read.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::commands::{menu_commands, Cmd, Menu};
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::theme::ThemeSource;
use crate::update::update;
use crate::view::{RenderOptions, Renderer};

use super::input::{parse_input, Input};

const PROMPT: &str = "> ";

/// Commands handled by the prompt itself rather than a menu
const EDITING_HELP: &[(&str, &str)] = &[
    ("append TEXT", "Append a line to the document"),
    ("set LINE TEXT", "Replace a line"),
    ("delete LINE", "Delete a line"),
    ("select ROW COL", "Select a table cell"),
    ("cell ROW COL VALUE", "Set a table cell"),
    ("resize W H", "Record the window size"),
    ("move X Y", "Record the window position"),
    ("themes", "List available themes"),
    ("help", "Show this list"),
];

/// The interactive application
pub struct App {
    pub model: AppModel,
    renderer: Renderer,
    needs_redraw: bool,
    quit: bool,
}

impl App {
    pub fn new(model: AppModel, options: RenderOptions) -> Self {
        Self {
            model,
            renderer: Renderer::new(options),
            needs_redraw: true,
            quit: false,
        }
    }

    /// Whether a Quit command has been processed
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Run a message through update and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.needs_redraw() {
            self.needs_redraw = true;
        }
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::WriteFile { path, content } => {
                let result = std::fs::write(&path, content).map_err(|e| e.to_string());
                self.dispatch(Msg::App(AppMsg::SaveCompleted { path, result }));
            }
            Cmd::SaveConfig { path, config } => {
                let result = config.save_to(&path);
                self.dispatch(Msg::App(AppMsg::ConfigSaved(result)));
            }
            Cmd::Quit => {
                tracing::info!("Quit requested");
                self.quit = true;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Render the current model
    pub fn render(&self) -> String {
        self.renderer.render(&self.model)
    }

    /// Read commands from `input` until exit or end of input
    ///
    /// End of input is treated like File > Exit.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let mut lines = input.lines();
        while !self.quit {
            if self.needs_redraw {
                output.write_all(self.render().as_bytes())?;
                self.needs_redraw = false;
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                self.dispatch(Msg::App(AppMsg::Exit));
                break;
            };
            let line = line?;

            match parse_input(&line, &self.model) {
                Ok(Input::Msg(msg)) => self.dispatch(msg),
                Ok(Input::Help) => write_help(&mut output)?,
                Ok(Input::Themes) => self.write_themes(&mut output)?,
                Ok(Input::OpenTypes) => self.write_open_types(&mut output)?,
                Ok(Input::Empty) => {}
                Err(e) => writeln!(output, "{}", e)?,
            }
        }
        writeln!(output)?;
        Ok(())
    }

    fn write_open_types<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "Usage: open PATH")?;
        for (label, patterns) in &self.model.config.open_types {
            writeln!(output, "  {:<20} {}", label, patterns.join(" "))?;
        }
        Ok(())
    }

    fn write_themes<W: Write>(&self, output: &mut W) -> Result<()> {
        for info in &self.model.available_themes {
            let marker = if info.id == self.model.config.theme {
                "*"
            } else {
                " "
            };
            let source = match info.source {
                ThemeSource::User => "user",
                ThemeSource::Builtin => "builtin",
            };
            writeln!(output, "{} {:<20} {} ({})", marker, info.id, info.name, source)?;
        }
        Ok(())
    }
}

fn write_help<W: Write>(output: &mut W) -> Result<()> {
    for menu in [Menu::File, Menu::Tools, Menu::Editor, Menu::About] {
        writeln!(output, "{}:", menu.label())?;
        for def in menu_commands(menu) {
            let usage = match def.argument {
                Some(arg) => format!("{} [{}]", def.name, arg),
                None => def.name.to_string(),
            };
            writeln!(output, "  {:<24} {}", usage, def.label)?;
        }
    }
    writeln!(output, "Editing:")?;
    for (usage, label) in EDITING_HELP {
        writeln!(output, "  {:<24} {}", usage, label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigLocation;
    use std::io::Cursor;

    fn test_app() -> App {
        let model = AppModel::with_location(ConfigLocation::default(), None);
        App::new(
            model,
            RenderOptions {
                width: 60,
                color: false,
            },
        )
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut app = test_app();
        let mut out = Vec::new();
        app.run(Cursor::new(""), &mut out).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_session_converts_and_renders() {
        let mut app = test_app();
        let mut out = Vec::new();
        let script = "append a,b\nappend c\nto-table ,\nexit\n";
        app.run(Cursor::new(script), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("a | b"));
        assert!(text.contains("Table 2x2"));
        assert!(app.should_quit());
    }

    #[test]
    fn test_bare_open_lists_open_types() {
        let mut app = test_app();
        let mut out = Vec::new();
        app.run(Cursor::new("open\nexit\n"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Usage: open PATH"));
        assert!(text.contains("*.csv *.tsv"));
        assert_eq!(app.model.document.text(), "");
    }

    #[test]
    fn test_help_lists_menus() {
        let mut out = Vec::new();
        write_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Tools:"));
        assert!(text.contains("to-table [delimiter]"));
        assert!(text.contains("cell ROW COL VALUE"));
    }

    #[test]
    fn test_errors_are_reported_inline() {
        let mut app = test_app();
        let mut out = Vec::new();
        app.run(Cursor::new("bogus\nexit\n"), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Unknown command: bogus"));
    }
}

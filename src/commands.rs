//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::config::EditorConfig;

// ============================================================================
// Menu Registry
// ============================================================================

/// Menu a command lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    File,
    Tools,
    Editor,
    About,
}

impl Menu {
    pub fn label(self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Tools => "Tools",
            Menu::Editor => "Editor",
            Menu::About => "About",
        }
    }
}

/// Identifies a menu command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // File
    NewFile,
    OpenFile,
    SaveFile,
    Exit,

    // Tools
    ShowText,
    ShowTable,
    ConvertToTable,
    ConvertToText,
    ToggleConsole,
    ImportCsv,
    ExportCsv,

    // Editor
    ReloadThemes,
    ColorPicker,
    SwitchTheme,

    // About
    About,
}

/// A menu entry
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub menu: Menu,
    pub label: &'static str,
    /// Word typed at the prompt to run this command
    pub name: &'static str,
    /// What the prompt asks for when the command takes an argument
    pub argument: Option<&'static str>,
}

/// Static registry of all menu commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::NewFile,
        menu: Menu::File,
        label: "New",
        name: "new",
        argument: None,
    },
    CommandDef {
        id: CommandId::OpenFile,
        menu: Menu::File,
        label: "Open...",
        name: "open",
        argument: Some("path"),
    },
    CommandDef {
        id: CommandId::SaveFile,
        menu: Menu::File,
        label: "Save...",
        name: "save",
        argument: Some("path"),
    },
    CommandDef {
        id: CommandId::Exit,
        menu: Menu::File,
        label: "Exit",
        name: "exit",
        argument: None,
    },
    CommandDef {
        id: CommandId::ShowText,
        menu: Menu::Tools,
        label: "Show text",
        name: "text",
        argument: None,
    },
    CommandDef {
        id: CommandId::ShowTable,
        menu: Menu::Tools,
        label: "Show table",
        name: "table",
        argument: None,
    },
    CommandDef {
        id: CommandId::ConvertToTable,
        menu: Menu::Tools,
        label: "Convert to table",
        name: "to-table",
        argument: Some("delimiter"),
    },
    CommandDef {
        id: CommandId::ConvertToText,
        menu: Menu::Tools,
        label: "Convert to text",
        name: "to-text",
        argument: Some("delimiter"),
    },
    CommandDef {
        id: CommandId::ToggleConsole,
        menu: Menu::Tools,
        label: "Toggle console",
        name: "console",
        argument: None,
    },
    CommandDef {
        id: CommandId::ImportCsv,
        menu: Menu::Tools,
        label: "Import CSV...",
        name: "import",
        argument: Some("path"),
    },
    CommandDef {
        id: CommandId::ExportCsv,
        menu: Menu::Tools,
        label: "Export CSV...",
        name: "export",
        argument: Some("path"),
    },
    CommandDef {
        id: CommandId::ReloadThemes,
        menu: Menu::Editor,
        label: "Reload themes",
        name: "reload-themes",
        argument: None,
    },
    CommandDef {
        id: CommandId::ColorPicker,
        menu: Menu::Editor,
        label: "Color picker",
        name: "color",
        argument: Some("#RRGGBB"),
    },
    CommandDef {
        id: CommandId::SwitchTheme,
        menu: Menu::Editor,
        label: "Theme...",
        name: "theme",
        argument: Some("theme id"),
    },
    CommandDef {
        id: CommandId::About,
        menu: Menu::About,
        label: "About",
        name: "about",
        argument: None,
    },
];

/// Find a command by the word typed at the prompt
pub fn find_command(name: &str) -> Option<&'static CommandDef> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Commands under a menu, in registry order
pub fn menu_commands(menu: Menu) -> impl Iterator<Item = &'static CommandDef> {
    COMMANDS.iter().filter(move |c| c.menu == menu)
}

// ============================================================================
// Side-effect Commands
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Write text to a file; completion comes back as `AppMsg::SaveCompleted`
    WriteFile { path: PathBuf, content: String },
    /// Persist config; completion comes back as `AppMsg::ConfigSaved`
    SaveConfig { path: PathBuf, config: EditorConfig },
    /// Request application exit
    Quit,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::WriteFile { .. } => true,
            // Config persistence has no visible effect
            Cmd::SaveConfig { .. } => false,
            // Quit doesn't need redraw - app is exiting
            Cmd::Quit => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Whether this command (or any in a batch) quits
    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_quit()),
            _ => false,
        }
    }
}

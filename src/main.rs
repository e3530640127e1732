use std::io::{self, IsTerminal};

use anyhow::{anyhow, Result};
use clap::Parser;

use gridpad::cli::{CliArgs, OutputMode};
use gridpad::model::{AppModel, ConfigLocation};
use gridpad::runtime::App;
use gridpad::view::RenderOptions;

/// Width used when the terminal size is unknown
const DEFAULT_WIDTH: usize = 80;

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.trim().parse().ok())
        .filter(|&w: &usize| w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

fn main() -> Result<()> {
    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    let location = match &startup.config_dir {
        Some(dir) => ConfigLocation::in_dir(dir),
        None => ConfigLocation::user(),
    };
    gridpad::tracing::init(location.logs_dir.clone());
    tracing::info!("Starting gridpad with {:?}", startup.mode);

    location.ensure_dirs();
    let model = AppModel::with_location(location, startup.file_path());

    let stdout = io::stdout();
    let options = RenderOptions {
        width: terminal_width(),
        color: stdout.is_terminal(),
    };
    let mut app = App::new(model, options);
    for msg in startup.startup_messages() {
        app.dispatch(msg);
    }

    match startup.output {
        OutputMode::Print => print!("{}", app.render()),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&app.model.grid.grid)?),
        OutputMode::Interactive => app.run(io::stdin().lock(), stdout.lock())?,
    }

    Ok(())
}

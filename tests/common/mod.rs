//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gridpad::model::{sync_status_bar, AppModel, ConfigLocation, Document};
use gridpad::runtime::App;
use gridpad::view::RenderOptions;

/// Create a test model with the given text and no config persistence
pub fn test_model(text: &str) -> AppModel {
    let mut model = AppModel::with_location(ConfigLocation::default(), None);
    model.document = Document::with_text(text);
    sync_status_bar(&mut model);
    model
}

/// Create a test model whose config and themes live in `dir`
pub fn test_model_in(dir: &Path) -> AppModel {
    AppModel::with_location(ConfigLocation::in_dir(dir), None)
}

/// Wrap a model in an app that renders plain text
pub fn test_app(model: AppModel) -> App {
    App::new(
        model,
        RenderOptions {
            width: 60,
            color: false,
        },
    )
}

/// Helper to get buffer content as string
pub fn buffer_to_string(model: &AppModel) -> String {
    model.document.buffer.to_string()
}

/// Write a file into `dir` and return its path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write test file");
    path
}

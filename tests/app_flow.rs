//! End-to-end sessions through the prompt loop

mod common;

use std::io::Cursor;

use common::{test_app, test_model, test_model_in, write_file};
use gridpad::config::EditorConfig;
use gridpad::messages::AppMsg;
use gridpad::model::ViewMode;
use gridpad::theme::MONOKAI_YAML;
use gridpad::Msg;
use tempfile::TempDir;

fn run_script(app: &mut gridpad::runtime::App, script: &str) -> String {
    let mut out = Vec::new();
    app.run(Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_exit_persists_theme_and_geometry() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(test_model_in(dir.path()));

    run_script(&mut app, "theme monokai\nresize 1024 700\nmove 5 6\nexit\n");

    assert!(app.should_quit());
    let saved = EditorConfig::load_from(&dir.path().join("config.yaml"));
    assert_eq!(saved.theme, "monokai");
    assert_eq!(saved.window.width, 1024);
    assert_eq!(saved.window.height, 700);
    assert_eq!((saved.window.x, saved.window.y), (5, 6));
}

#[test]
fn test_saved_theme_is_restored() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(test_model_in(dir.path()));
    app.dispatch(Msg::App(AppMsg::SwitchTheme("default-light".into())));
    app.dispatch(Msg::App(AppMsg::Exit));

    let model = test_model_in(dir.path());
    assert_eq!(model.theme.name, "Default Light");
}

#[test]
fn test_end_of_input_also_saves_config() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(test_model_in(dir.path()));

    run_script(&mut app, "resize 640 480\n");

    let saved = EditorConfig::load_from(&dir.path().join("config.yaml"));
    assert_eq!(saved.window.width, 640);
}

#[test]
fn test_reload_picks_up_new_user_theme() {
    let dir = TempDir::new().unwrap();
    let mut app = test_app(test_model_in(dir.path()));
    assert_eq!(app.model.available_themes.len(), 3);

    std::fs::create_dir_all(dir.path().join("themes")).unwrap();
    write_file(
        &dir.path().join("themes"),
        "dusk.yaml",
        &MONOKAI_YAML.replace("name: \"Monokai\"", "name: \"Dusk\""),
    );
    let out = run_script(&mut app, "reload-themes\nthemes\ntheme dusk\nexit\n");

    assert_eq!(app.model.available_themes.len(), 4);
    assert!(out.contains("dusk"));
    assert!(out.contains("(user)"));
    assert_eq!(app.model.theme.name, "Dusk");
}

#[test]
fn test_table_session() {
    let mut app = test_app(test_model("name age\nada 36\nalan\n"));

    let out = run_script(
        &mut app,
        "to-table  \ncell 3 2 41\ntext\ntable\nto-text ;\nexit\n",
    );

    assert!(out.contains("ada  | 36"));
    assert_eq!(app.model.view_mode, ViewMode::Text);
    assert_eq!(app.model.document.text(), "name;age\nada;36\nalan;41\n");
}

#[test]
fn test_console_shows_status_history() {
    let mut app = test_app(test_model("x\n"));

    let out = run_script(&mut app, "about\nconsole\nexit\n");

    assert!(app.model.ui.console_visible);
    assert!(out.contains(" console "));
    assert!(out.contains("gridpad "));
}

#[test]
fn test_color_picker_reports_color() {
    let mut app = test_app(test_model(""));
    run_script(&mut app, "color 00ff7f\nexit\n");
    assert_eq!(app.model.ui.status_message, "Color: #00FF7F");
}

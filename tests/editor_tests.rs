use std::fs;
use tempfile::TempDir;
use waypointer::commands::Command;
use waypointer::editor::buffer::Buffer;
use waypointer::editor::mode::EditorMode;
use waypointer::editor::state::{EditorState, MessageLevel};
use waypointer::file::loader::load_text_file;
use waypointer::history::{Navigator, PositionSource, Waypoint, WaypointNavigator};
use waypointer::input::handler::handle_input;
use waypointer::input::InputEvent;

fn write_file(dir: &TempDir, name: &str, lines: usize) -> String {
    let path = dir.path().join(name);
    let content: Vec<String> = (0..lines).map(|i| format!("{} line {}", name, i)).collect();
    fs::write(&path, content.join("\n")).unwrap();
    path.to_string_lossy().into_owned()
}

fn new_state() -> EditorState {
    EditorState::new("default-dark".to_string())
}

fn type_command(state: &mut EditorState, nav: &mut WaypointNavigator, command: &str) -> bool {
    handle_input(InputEvent::EnterCommandMode, state, nav).unwrap();
    for c in command.chars() {
        handle_input(InputEvent::CommandCharacter(c), state, nav).unwrap();
    }
    handle_input(InputEvent::CommandSubmit, state, nav).unwrap()
}

#[test]
fn test_no_position_without_file() {
    let state = new_state();
    assert_eq!(state.current_position(), None);
    assert_eq!(state.filename(), None);
}

#[test]
fn test_load_text_file_makes_path_absolute() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.txt", 5);

    let buffer = load_text_file(&path).unwrap();

    assert!(std::path::Path::new(buffer.path()).is_absolute());
    assert_eq!(buffer.line_count(), 5);
    assert_eq!(buffer.line(2), Some("notes.txt line 2"));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let result = load_text_file(dir.path().join("missing.txt"));
    assert!(result.is_err());
}

#[test]
fn test_position_tracks_cursor() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "a.txt", 10);
    let mut state = new_state();
    state.open_file(&path).unwrap();
    state.move_down(4);

    let position = state.current_position().unwrap();
    assert_eq!(position.file(), state.filename().unwrap());
    assert_eq!(position.line(), 4);
}

#[test]
fn test_notify_sets_info_message() {
    let mut state = new_state();
    state.notify("Cleared!");

    let message = state.message().unwrap();
    assert_eq!(message.text, "Cleared!");
    assert_eq!(message.level, MessageLevel::Info);
}

#[test]
fn test_jump_applied_after_queueing() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", 10);
    let b = write_file(&dir, "b.txt", 10);
    let mut state = new_state();
    state.open_file(&a).unwrap();
    let a_abs = state.filename().unwrap().to_string();
    let b_abs = load_text_file(&b).unwrap().path().to_string();

    state.move_to(Waypoint::new(b_abs.clone(), 7));
    assert_eq!(state.filename(), Some(a_abs.as_str()));

    state.apply_pending_jumps();

    assert_eq!(state.filename(), Some(b_abs.as_str()));
    assert_eq!(state.cursor_line(), 7);
    assert_eq!(state.pending_jumps().count(), 0);
}

#[test]
fn test_jump_past_end_lands_on_last_line() {
    let mut state = new_state();
    state.set_buffer(Buffer::from_text("/virtual.txt", "a\nb\nc"));

    state.move_to(Waypoint::new("/virtual.txt", 500));
    state.apply_pending_jumps();

    assert_eq!(state.cursor_line(), 2);
}

#[test]
fn test_jump_to_missing_file_reports_error() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", 3);
    let mut state = new_state();
    state.open_file(&a).unwrap();
    state.move_down(2);
    let gone = dir.path().join("gone.txt").to_string_lossy().into_owned();

    state.move_to(Waypoint::new(gone, 1));
    state.apply_pending_jumps();

    assert_eq!(state.cursor_line(), 2);
    assert_eq!(state.message().unwrap().level, MessageLevel::Error);
}

#[test]
fn test_back_and_forward_across_files() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", 50);
    let b = write_file(&dir, "b.txt", 50);
    let mut state = new_state();
    let mut nav = WaypointNavigator::new();

    state.open_file(&a).unwrap();
    state.set_cursor_line(12);
    let saved = state.current_position().unwrap();
    handle_input(InputEvent::Waypoint(Command::Save), &mut state, &mut nav)
        .unwrap();
    assert_eq!(state.message().unwrap().text, format!("Stored {}", saved));

    state.open_file(&b).unwrap();
    state.set_cursor_line(30);
    let left = state.current_position().unwrap();

    handle_input(InputEvent::Waypoint(Command::Back), &mut state, &mut nav)
        .unwrap();
    assert_eq!(state.current_position(), Some(saved));
    assert_eq!(nav.forward_stack().peek(), Some(&left));

    handle_input(InputEvent::Waypoint(Command::Forward), &mut state, &mut nav)
        .unwrap();
    assert_eq!(state.current_position(), Some(left));
    assert!(nav.forward_stack().is_empty());
}

#[test]
fn test_command_line_runs_navigator_commands() {
    let mut state = new_state();
    let mut nav = WaypointNavigator::new();
    state.set_buffer(Buffer::from_text("/virtual.txt", "a\nb\nc\nd"));

    state.set_cursor_line(1);
    assert!(!type_command(&mut state, &mut nav, "save"));
    state.set_cursor_line(3);
    assert!(!type_command(&mut state, &mut nav, "waypointer.BackWithoutClear"));

    assert_eq!(state.cursor_line(), 1);
    assert_eq!(nav.backward().size(), 1);
    assert_eq!(nav.forward_stack().size(), 1);
    assert_eq!(state.mode(), &EditorMode::Normal);

    type_command(&mut state, &mut nav, "clear");
    assert_eq!(state.message().unwrap().text, "Cleared!");
    assert!(nav.backward().is_empty());
}

#[test]
fn test_command_line_unknown_command() {
    let mut state = new_state();
    let mut nav = WaypointNavigator::new();

    assert!(!type_command(&mut state, &mut nav, "teleport"));

    let message = state.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.contains("teleport"));
}

#[test]
fn test_command_line_edit_and_quit() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", 3);
    let mut state = new_state();
    let mut nav = WaypointNavigator::new();

    assert!(!type_command(&mut state, &mut nav, &format!("e {}", a)));
    assert!(state.filename().is_some());

    assert!(type_command(&mut state, &mut nav, "q"));
}

#[test]
fn test_backspace_on_empty_command_leaves_mode() {
    let mut state = new_state();
    let mut nav = WaypointNavigator::new();

    handle_input(InputEvent::EnterCommandMode, &mut state, &mut nav).unwrap();
    assert_eq!(state.mode(), &EditorMode::Command);
    handle_input(InputEvent::CommandBackspace, &mut state, &mut nav).unwrap();

    assert_eq!(state.mode(), &EditorMode::Normal);
}

#[test]
fn test_capacity_overflow_surfaces_as_error() {
    let mut state = new_state();
    let mut nav = WaypointNavigator::with_capacities(Some(1), None);
    state.set_buffer(Buffer::from_text("/virtual.txt", "a\nb"));

    let save = InputEvent::Waypoint(Command::Save);
    handle_input(save.clone(), &mut state, &mut nav).unwrap();
    state.move_down(1);

    assert!(handle_input(save, &mut state, &mut nav).is_err());
}

#[test]
fn test_theme_command_requests_change() {
    let mut state = new_state();
    let mut nav = WaypointNavigator::new();

    type_command(&mut state, &mut nav, "theme default-light");

    assert_eq!(state.take_pending_theme(), Some("default-light".to_string()));
    assert_eq!(state.current_theme(), "default-light");
    assert_eq!(state.take_pending_theme(), None);
}

#[test]
fn test_unknown_theme_lists_available() {
    let mut state = new_state();
    let mut nav = WaypointNavigator::new();

    type_command(&mut state, &mut nav, "theme solarized");

    let message = state.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.contains("default-dark"));
    assert!(message.text.contains("default-light"));
    assert_eq!(state.take_pending_theme(), None);
}

#[test]
fn test_help_lists_command_descriptions() {
    let mut state = new_state();
    let mut nav = WaypointNavigator::new();

    type_command(&mut state, &mut nav, "help");

    let text = &state.message().unwrap().text;
    for command in Command::ALL {
        assert!(text.contains(&format!("{} - {}", command.name(), command.description())));
    }
}

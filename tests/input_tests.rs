use termion::event::{Event, Key};
use waypointer::commands::Command;
use waypointer::editor::mode::EditorMode;
use waypointer::input::keys::{map_key_event, InputEvent};

fn normal(key: Key) -> InputEvent {
    map_key_event(Event::Key(key), &EditorMode::Normal)
}

#[test]
fn test_waypoint_keys() {
    assert_eq!(normal(Key::Char('s')), InputEvent::Waypoint(Command::Save));
    assert_eq!(normal(Key::Char('b')), InputEvent::Waypoint(Command::Back));
    assert_eq!(
        normal(Key::Char('B')),
        InputEvent::Waypoint(Command::BackWithoutClear)
    );
    assert_eq!(normal(Key::Char('f')), InputEvent::Waypoint(Command::Forward));
    assert_eq!(
        normal(Key::Char('x')),
        InputEvent::Waypoint(Command::RemoveLast)
    );
    assert_eq!(normal(Key::Char('X')), InputEvent::Waypoint(Command::Clear));
}

#[test]
fn test_movement_keys() {
    assert_eq!(normal(Key::Char('j')), InputEvent::MoveDown);
    assert_eq!(normal(Key::Down), InputEvent::MoveDown);
    assert_eq!(normal(Key::Char('k')), InputEvent::MoveUp);
    assert_eq!(normal(Key::Up), InputEvent::MoveUp);
    assert_eq!(normal(Key::Char('g')), InputEvent::JumpToTop);
    assert_eq!(normal(Key::Char('G')), InputEvent::JumpToBottom);
    assert_eq!(normal(Key::PageDown), InputEvent::PageDown);
    assert_eq!(normal(Key::Ctrl('b')), InputEvent::PageUp);
}

#[test]
fn test_command_mode_key() {
    assert_eq!(normal(Key::Char(':')), InputEvent::EnterCommandMode);
}

#[test]
fn test_escape_leaves_command_mode() {
    let event = Event::Key(Key::Esc);
    assert_eq!(
        map_key_event(event, &EditorMode::Command),
        InputEvent::ExitMode
    );
}

#[test]
fn test_unmapped_key() {
    assert_eq!(normal(Key::Char('z')), InputEvent::Unknown);
}

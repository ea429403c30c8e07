use waypointer::commands::{Command, CommandError};
use waypointer::history::{Navigator, PositionSource, Waypoint, WaypointNavigator};

struct Host {
    at: Option<Waypoint>,
    moves: Vec<Waypoint>,
    messages: Vec<String>,
}

impl Host {
    fn at(file: &str, line: usize) -> Self {
        Self {
            at: Some(Waypoint::new(file, line)),
            moves: Vec::new(),
            messages: Vec::new(),
        }
    }
}

impl PositionSource for Host {
    fn current_position(&self) -> Option<Waypoint> {
        self.at.clone()
    }
}

impl Navigator for Host {
    fn move_to(&mut self, waypoint: Waypoint) {
        self.moves.push(waypoint);
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[test]
fn test_host_facing_names() {
    let names: Vec<&str> = Command::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec![
            "waypointer.Save",
            "waypointer.Back",
            "waypointer.BackWithoutClear",
            "waypointer.Forward",
            "waypointer.RemoveLast",
            "waypointer.Clear",
        ]
    );
}

#[test]
fn test_parse_short_forms() {
    assert_eq!("save".parse::<Command>(), Ok(Command::Save));
    assert_eq!("Back".parse::<Command>(), Ok(Command::Back));
    assert_eq!(
        "back-without-clear".parse::<Command>(),
        Ok(Command::BackWithoutClear)
    );
    assert_eq!("FORWARD".parse::<Command>(), Ok(Command::Forward));
    assert_eq!("remove_last".parse::<Command>(), Ok(Command::RemoveLast));
    assert_eq!("  clear ".parse::<Command>(), Ok(Command::Clear));
}

#[test]
fn test_parse_unknown() {
    assert_eq!(
        "waypointer.Jump".parse::<Command>(),
        Err(CommandError::Unknown("waypointer.Jump".to_string()))
    );
    assert!("".parse::<Command>().is_err());
}

#[test]
fn test_display_matches_name() {
    assert_eq!(Command::Forward.to_string(), "waypointer.Forward");
}

#[test]
fn test_descriptions_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for cmd in Command::ALL {
        assert!(seen.insert(cmd.description()));
    }
}

#[test]
fn test_execute_dispatches_to_navigator() {
    let mut nav = WaypointNavigator::new();
    let mut host = Host::at("a.rs", 1);

    Command::Save.execute(&mut nav, &mut host).unwrap();
    assert_eq!(nav.backward().size(), 1);

    host.at = Some(Waypoint::new("a.rs", 9));
    Command::BackWithoutClear
        .execute(&mut nav, &mut host)
        .unwrap();
    assert_eq!(nav.backward().size(), 1);
    assert_eq!(nav.forward_stack().size(), 1);

    Command::Back.execute(&mut nav, &mut host).unwrap();
    assert_eq!(nav.backward().size(), 0);
    assert_eq!(nav.forward_stack().size(), 2);

    Command::Forward.execute(&mut nav, &mut host).unwrap();
    assert_eq!(nav.forward_stack().size(), 1);
    assert_eq!(host.moves.len(), 3);

    Command::RemoveLast.execute(&mut nav, &mut host).unwrap();
    assert_eq!(host.messages.last().unwrap(), "Backward Stack is Empty");

    Command::Clear.execute(&mut nav, &mut host).unwrap();
    assert!(nav.forward_stack().is_empty());
    assert_eq!(host.messages.last().unwrap(), "Cleared!");
}

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use waypointer::config::Config;
use waypointer::editor::state::EditorState;
use waypointer::history::WaypointNavigator;
use waypointer::input::InputHandler;
use waypointer::theme::{get_builtin_theme, list_builtin_themes};
use waypointer::ui::UI;

/// Waypointer - bookmark file positions and walk back and forward through them
#[derive(Parser)]
#[command(name = "waypointer")]
#[command(version)]
#[command(about = "Bookmark file positions and navigate back and forward through them", long_about = None)]
struct Cli {
    /// File to open
    file: Option<PathBuf>,

    /// Line to place the cursor on (0-based)
    #[arg(short, long, default_value_t = 0)]
    line: usize,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Write logs to this file (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// Without this, panic messages would be hidden by the alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = Some(log_file);
    }

    waypointer::logging::init(config.log_file.as_deref(), &config.log_level)?;

    let theme = match get_builtin_theme(&config.theme) {
        Some(theme) => theme,
        None => {
            eprintln!(
                "Warning: Theme '{}' not found, using default-dark (available: {})",
                config.theme,
                list_builtin_themes().join(", ")
            );
            config.theme = "default-dark".to_string();
            get_builtin_theme(&config.theme).context("Built-in theme missing")?
        }
    };

    let mut state = EditorState::new(config.theme.clone());
    state.set_show_line_numbers(config.show_line_numbers);
    state.set_show_waypoint_panel(config.show_waypoint_panel);

    // Open the file before taking over the terminal so errors print normally
    if let Some(path) = &cli.file {
        state.open_file(path)?;
        state.set_cursor_line(cli.line);
    }

    // The navigator lives for the whole session and is dropped on exit
    let mut navigator = config.build_navigator();
    tracing::info!(
        backward_capacity = ?config.backward_capacity,
        forward_capacity = ?config.forward_capacity,
        "session started"
    );

    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut ui = UI::new(theme);
    let mut input_handler = InputHandler::new();

    let result = run_event_loop(
        &mut terminal,
        &mut ui,
        &mut input_handler,
        &mut state,
        &mut navigator,
    );

    // Termion restores the screen through Drop guards; the cursor needs showing
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    tracing::info!("session ended");
    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &mut UI,
    input_handler: &mut InputHandler,
    state: &mut EditorState,
    navigator: &mut WaypointNavigator,
) -> Result<()> {
    loop {
        if let Some(theme_name) = state.take_pending_theme() {
            ui.set_theme(&theme_name);
        }

        ui.render(terminal, state, navigator)?;

        match input_handler.poll_event(Duration::from_millis(100))? {
            Some(event) => {
                if input_handler.handle_event(event, state, navigator)? {
                    break;
                }
            }
            None => break,
        }
    }

    Ok(())
}

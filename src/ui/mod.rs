//! UI module for the waypointer terminal interface.
//!
//! This module lays out the screen and composes the widgets.

pub mod message_area;
pub mod status_line;
pub mod text_view;
pub mod waypoint_panel;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::editor::state::EditorState;
use crate::history::WaypointNavigator;
use crate::theme::Theme;

/// Width of the waypoint side panel in columns.
const PANEL_WIDTH: u16 = 42;

/// Main UI structure that manages the terminal interface rendering.
///
/// The screen is split into:
/// - Text view (top left): the open file with the cursor line highlighted
/// - Waypoint panel (top right, optional): backward and forward stacks
/// - Status line: mode, file, cursor position and stack depths
/// - Message area (bottom): notifications and the `:` prompt
///
/// # Example
///
/// ```
/// use waypointer::ui::UI;
/// use waypointer::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// assert_eq!(ui.theme_name(), "default-dark");
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Renders the UI to the terminal.
    ///
    /// Also records the text view height in `state` so paging and scrolling
    /// follow the real screen size.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut EditorState,
        navigator: &WaypointNavigator,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Main view area
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            let (text_area, panel_area) = if state.show_waypoint_panel() {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(10), Constraint::Length(PANEL_WIDTH)])
                    .split(chunks[0]);
                (columns[0], Some(columns[1]))
            } else {
                (chunks[0], None)
            };

            state.set_viewport_height(text_area.height as usize);

            text_view::render_text_view(f, text_area, state, navigator, &self.theme.colors);

            if let Some(area) = panel_area {
                waypoint_panel::render_waypoint_panel(f, area, navigator, &self.theme.colors);
            }

            status_line::render_status_line(f, chunks[1], state, navigator, &self.theme.colors);
            message_area::render_message_area(f, chunks[2], state, &self.theme.colors);
        })?;

        Ok(())
    }
}

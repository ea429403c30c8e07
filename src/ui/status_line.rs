//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, COMMAND)
//! - Filename (or "[No Name]" when nothing is open)
//! - Stack depths as `back:N fwd:M`
//! - Cursor position (line/total, 1-based)
//!
//! Example status line: `NORMAL | /src/main.rs  back:3 fwd:1           5/20`

use crate::editor::state::EditorState;
use crate::history::WaypointNavigator;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line.
pub fn render_status_line(
    f: &mut Frame,
    area: Rect,
    state: &EditorState,
    navigator: &WaypointNavigator,
    colors: &ThemeColors,
) {
    let filename = state.filename().unwrap_or("[No Name]");
    let mode_and_file = format!("{} | {}", state.mode(), filename);

    let depths = format!(
        "  back:{} fwd:{}",
        navigator.backward().size(),
        navigator.forward_stack().size()
    );

    let position = match state.buffer() {
        Some(buffer) => format!("{}/{}", state.cursor_line() + 1, buffer.line_count()),
        None => String::new(),
    };

    // Calculate padding to position right-aligned text
    let total_width = area.width as usize;
    let left_len = mode_and_file.chars().count() + depths.len();
    let padding = if left_len + position.len() + 1 < total_width {
        total_width - left_len - position.len()
    } else {
        1
    };

    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let depth_style = Style::default().fg(colors.backward).bg(colors.status_line_bg);

    let line = Line::from(vec![
        Span::styled(mode_and_file, default_style),
        Span::styled(depths, depth_style),
        Span::styled(" ".repeat(padding), default_style),
        Span::styled(position, default_style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::buffer::Buffer;
    use crate::theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &EditorState, navigator: &WaypointNavigator) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = theme::get_builtin_theme("default-dark").unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_status_line(f, area, state, navigator, &theme.colors);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_status_line_no_filename() {
        let state = EditorState::new("default-dark".to_string());
        let text = draw(&state, &WaypointNavigator::new());
        assert!(
            text.contains("[No Name]"),
            "Status line should show [No Name]: {}",
            text
        );
    }

    #[test]
    fn test_status_line_position_and_depths() {
        let mut state = EditorState::new("default-dark".to_string());
        state.set_buffer(Buffer::from_text("/w.txt", "a\nb\nc\nd"));
        state.set_cursor_line(2);
        let text = draw(&state, &WaypointNavigator::new());
        assert!(text.contains("/w.txt"));
        assert!(text.contains("back:0 fwd:0"));
        assert!(text.trim_end().ends_with("3/4"), "got: {}", text);
    }
}

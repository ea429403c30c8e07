//! Text view showing the open file.

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
use std::collections::HashSet;

/// Marker drawn in the gutter next to lines with a saved waypoint.
const WAYPOINT_MARK: &str = "●";

/// Renders the visible slice of the open buffer.
///
/// The cursor line is highlighted. Lines of the open file that are on the
/// backward stack get a marker in the gutter. Line numbers in the gutter are
/// 1-based like any editor; waypoints themselves store 0-based lines.
pub fn render_text_view(
    f: &mut Frame,
    area: Rect,
    state: &EditorState,
    navigator: &WaypointNavigator,
    colors: &ThemeColors,
) {
    let base = Style::default().fg(colors.foreground).bg(colors.background);

    let Some(buffer) = state.buffer() else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No file open. Use :e <path> to open one.",
            Style::default().fg(colors.line_number),
        )))
        .style(base);
        f.render_widget(hint, area);
        return;
    };

    let marked: HashSet<usize> = navigator
        .backward()
        .iter()
        .filter(|wp| wp.file() == buffer.path())
        .map(|wp| wp.line())
        .collect();

    let number_width = buffer.line_count().to_string().len();
    let height = area.height as usize;

    let lines: Vec<Line> = buffer
        .lines()
        .iter()
        .enumerate()
        .skip(state.scroll_offset())
        .take(height)
        .map(|(index, text)| {
            let mut spans = Vec::with_capacity(3);

            let mark = if marked.contains(&index) {
                WAYPOINT_MARK
            } else {
                " "
            };
            spans.push(Span::styled(
                mark,
                Style::default().fg(colors.waypoint_marker),
            ));

            if state.show_line_numbers() {
                spans.push(Span::styled(
                    format!("{:>width$} ", index + 1, width = number_width),
                    Style::default().fg(colors.line_number),
                ));
            }

            let text_style = if index == state.cursor_line() {
                base.bg(colors.cursor)
            } else {
                base
            };
            spans.push(Span::styled(text.as_str(), text_style));

            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).style(base), area);
}

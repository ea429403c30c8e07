//! Side panel listing the backward and forward stacks.

use crate::history::{BoundedStack, Waypoint, WaypointNavigator};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::Path;

/// Renders both stacks, top entry first.
pub fn render_waypoint_panel(
    f: &mut Frame,
    area: Rect,
    navigator: &WaypointNavigator,
    colors: &ThemeColors,
) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_stack(
        f,
        halves[0],
        "Back",
        navigator.backward(),
        colors.backward,
        colors,
    );
    render_stack(
        f,
        halves[1],
        "Forward",
        navigator.forward_stack(),
        colors.forward,
        colors,
    );
}

fn render_stack(
    f: &mut Frame,
    area: Rect,
    title: &str,
    stack: &BoundedStack<Waypoint>,
    accent: ratatui::style::Color,
    colors: &ThemeColors,
) {
    let heading = match stack.capacity() {
        Some(capacity) => format!(" {} {}/{} ", title, stack.size(), capacity),
        None => format!(" {} {} ", title, stack.size()),
    };

    let lines: Vec<Line> = stack
        .iter()
        .enumerate()
        .map(|(depth, wp)| {
            let style = if depth == 0 {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.foreground)
            };
            Line::from(Span::styled(format_entry(wp), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(heading);

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(colors.background)),
        area,
    );
}

/// Formats a waypoint as `name:line`, using only the file name.
pub fn format_entry(wp: &Waypoint) -> String {
    let name = Path::new(wp.file())
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| wp.file().to_string());
    format!("{}:{}", name, wp.line())
}

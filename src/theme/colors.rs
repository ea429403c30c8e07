//! Color definitions for waypointer themes.

use ratatui::style::Color;

/// Every color used by the waypointer terminal UI.
///
/// # Examples
///
/// ```
/// use waypointer::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // UI colors
    /// Main background color.
    pub background: Color,
    /// Main text color.
    pub foreground: Color,
    /// Background of the cursor line.
    pub cursor: Color,
    /// Color of the line number gutter.
    pub line_number: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Text color for the status line.
    pub status_line_fg: Color,

    // Waypoint panel colors
    /// Entries on the backward stack.
    pub backward: Color,
    /// Entries on the forward stack.
    pub forward: Color,
    /// Lines of the open file that carry a waypoint.
    pub waypoint_marker: Color,

    // Semantic colors
    /// Error messages.
    pub error: Color,
    /// Warning messages.
    pub warning: Color,
    /// Informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            cursor: Color::DarkGray,
            line_number: Color::DarkGray,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            backward: Color::LightBlue,
            forward: Color::Green,
            waypoint_marker: Color::Yellow,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(229, 229, 230),
            line_number: Color::Rgb(160, 161, 167),
            status_line_bg: Color::Rgb(56, 58, 66),
            status_line_fg: Color::Rgb(250, 250, 250),

            backward: Color::Rgb(64, 120, 242),
            forward: Color::Rgb(80, 161, 79),
            waypoint_marker: Color::Rgb(193, 132, 1),

            error: Color::Rgb(228, 86, 73),
            warning: Color::Rgb(193, 132, 1),
            info: Color::Rgb(64, 120, 242),
        }
    }
}

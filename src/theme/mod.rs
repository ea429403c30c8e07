//! Theme system for waypointer.
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: for dark terminals
//! - `"default-light"`: for light terminals
//!
//! # Examples
//!
//! ```
//! use waypointer::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! assert_eq!(theme.name, "default-dark");
//! assert!(get_builtin_theme("no-such-theme").is_none());
//! ```

pub mod colors;

use colors::ThemeColors;

/// A named color theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name, or `None` if the name is unknown.
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        _ => return None,
    };
    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Lists the names of all built-in themes.
pub fn list_builtin_themes() -> Vec<String> {
    vec!["default-dark".to_string(), "default-light".to_string()]
}

//! Roster colour themes and the ANSI escapes used to paint them.
//!
//! Built-in themes are compiled in from `themes/*.toml`; custom themes are
//! loaded from a TOML file with the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! executive_fg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! notice_fg = "#a6e3a1"
//! ```

use crate::domain::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILT_IN_THEMES: [&str; 2] = ["catppuccin-mocha", "catppuccin-latte"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colours (`"#rrggbb"`) for each styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Roster title and column headers.
    pub header_fg: String,
    pub text_normal: String,
    /// Totals line and no-op notices.
    pub text_dim: String,
    /// Separator lines.
    pub border: String,
    /// Rows of employees at the top rank.
    pub executive_fg: String,
    /// "No employees" message.
    pub empty_state_fg: String,
    /// Notices for changes that took effect.
    pub notice_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name; `None` for unknown names.
    ///
    /// ```rust
    /// use company_roster::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            RosterError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| RosterError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb`; malformed colours fall back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: "#cba6f7".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                executive_fg: "#f9e2af".to_string(),
                empty_state_fg: "#89b4fa".to_string(),
                notice_fg: "#a6e3a1".to_string(),
            },
        })
    }
}

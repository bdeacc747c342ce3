// Theme system for the TUI
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/formdeck/themes/<name>.toml
// 2. Bundled themes (compiled into the binary)
// 3. Hardcoded fallback

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::Path;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Chrome ──────────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub highlight: Color,
    pub title: Color,
    pub status_bar: Color,
    pub muted: Color,
    pub border_type: BorderType,

    // ─── Selection ───────────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Form ────────────────────────────────────────────────
    pub error: Color,
    pub success: Color,
    pub label: Color,
}

impl Theme {
    /// Load a theme by name, falling back to the hardcoded default
    pub fn by_name(name: &str) -> Self {
        let external = crate::config::Config::themes_dir().and_then(|dir| Self::load_external(&dir, name));
        external
            .or_else(|| Self::load_bundled(name))
            .unwrap_or_else(|| {
                tracing::warn!(theme = name, "Theme not found, using fallback");
                Self::hardcoded_default()
            })
    }

    /// Names of the bundled themes
    pub fn available() -> Vec<String> {
        bundled::BUNDLED_THEMES
            .iter()
            .filter_map(|t| TomlTheme::from_str(t.content).ok())
            .map(|t| t.meta.name)
            .collect()
    }

    fn load_external(dir: &Path, name: &str) -> Option<Self> {
        let candidates = [name.to_string(), name.replace(' ', "_")];
        candidates.iter().find_map(|stem| {
            let path = dir.join(format!("{}.toml", stem));
            let contents = std::fs::read_to_string(&path).ok()?;
            match TomlTheme::from_str(&contents) {
                Ok(theme) => Some(Self::from_toml(theme)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Invalid theme file: {}", e);
                    None
                }
            }
        })
    }

    fn load_bundled(name: &str) -> Option<Self> {
        let filename = format!("{}.toml", name.replace(' ', "_"));
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))
            .and_then(|t| TomlTheme::from_str(t.content).ok())
            .map(Self::from_toml)
    }

    fn parse_border_type(value: Option<&str>) -> BorderType {
        match value {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Resolve a parsed TOML theme into concrete colors
    pub fn from_toml(toml: TomlTheme) -> Self {
        let parse = TomlTheme::parse_color;
        let foreground = parse(&toml.ui.foreground);

        Self {
            name: toml.meta.name,
            background: parse(&toml.ui.background),
            foreground,
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),
            title: parse(&toml.ui.title),
            status_bar: parse(&toml.ui.status_bar),
            muted: toml.ui.muted.as_deref().map(parse).unwrap_or(foreground),
            border_type: Self::parse_border_type(toml.ui.border_type.as_deref()),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),
            error: parse(&toml.form.error),
            success: parse(&toml.form.success),
            label: parse(&toml.form.label),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default() -> Self {
        Self {
            name: "Fallback".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            title: Color::Cyan,
            status_bar: Color::Gray,
            muted: Color::DarkGray,
            border_type: BorderType::Plain,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            error: Color::Red,
            success: Color::Green,
            label: Color::Blue,
        }
    }

    /// Border color for a panel based on focus state
    pub fn panel_border(&self, focused: bool) -> Color {
        if focused {
            self.highlight
        } else {
            self.border
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(crate::config::DEFAULT_THEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bundled_themes_parse() {
        for theme in bundled::BUNDLED_THEMES {
            assert!(
                TomlTheme::from_str(theme.content).is_ok(),
                "{} failed to parse",
                theme.filename
            );
        }
        assert_eq!(Theme::available(), vec!["Deck Dark", "Deck Light", "Terminal"]);
    }

    #[test]
    fn bundled_lookup_accepts_display_name() {
        let theme = Theme::load_bundled("Deck Light").expect("bundled theme");
        assert_eq!(theme.name, "Deck Light");
        assert_eq!(theme.border_type, BorderType::Rounded);
    }

    #[test]
    fn muted_falls_back_to_foreground() {
        let theme = Theme::load_bundled("terminal").expect("bundled theme");
        assert_eq!(theme.muted, Color::DarkGray);

        let mut toml = TomlTheme::from_str(bundled::BUNDLED_THEMES[0].content).unwrap();
        toml.ui.muted = None;
        let theme = Theme::from_toml(toml);
        assert_eq!(theme.muted, theme.foreground);
    }

    #[test]
    fn unknown_theme_uses_fallback() {
        assert!(Theme::load_bundled("No Such Theme").is_none());
        let theme = Theme::hardcoded_default();
        assert_eq!(theme.name, "Fallback");
    }
}

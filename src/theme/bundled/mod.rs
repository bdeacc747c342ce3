//! Bundled TOML themes (compiled into the binary)
//!
//! Users can override any of them by dropping a file with the same name
//! into `~/.config/formdeck/themes/`.

mod deck_dark;
mod deck_light;
mod terminal;

pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Deck_Dark.toml",
        content: deck_dark::THEME,
    },
    BundledTheme {
        filename: "Deck_Light.toml",
        content: deck_light::THEME,
    },
    BundledTheme {
        filename: "Terminal.toml",
        content: terminal::THEME,
    },
];

//! Deck Dark - the default theme

pub const THEME: &str = r##"# Deck Dark theme for formdeck

[meta]
name = "Deck Dark"
author = "formdeck"

[ui]
background = "#1e2127"
foreground = "#d7dae0"
border = "#5c6370"
border_focused = "#e5c07b"
title = "#56b6c2"
status_bar = "#abb2bf"
selection_bg = "#3e4451"
selection_fg = "#ffffff"
muted = "#7f848e"
border_type = "rounded"

[form]
error = "#e06c75"
success = "#98c379"
label = "#61afef"
"##;

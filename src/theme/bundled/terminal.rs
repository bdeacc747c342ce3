//! Terminal - inherits the terminal's own palette

pub const THEME: &str = r##"# Terminal theme for formdeck
# Uses ANSI colors so the terminal's palette shows through.

[meta]
name = "Terminal"

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:8"
border_focused = "ansi:3"
title = "ansi:6"
status_bar = "ansi:7"
selection_bg = "ansi:8"
selection_fg = "ansi:15"
muted = "ansi:8"

[form]
error = "ansi:1"
success = "ansi:2"
label = "ansi:4"
"##;

//! Deck Light

pub const THEME: &str = r##"# Deck Light theme for formdeck

[meta]
name = "Deck Light"
author = "formdeck"

[ui]
background = "#fafafa"
foreground = "#383a42"
border = "#a0a1a7"
border_focused = "#c18401"
title = "#0184bc"
status_bar = "#383a42"
selection_bg = "#e5e5e6"
selection_fg = "#202227"
muted = "#9d9d9f"
border_type = "rounded"

[form]
error = "#e45649"
success = "#50a14f"
label = "#4078f2"
"##;

// UI components
//
// Each component renders one region of the screen. Most take the whole
// App read-only; the toast owns its own state.

pub mod control_panel;
pub mod form_panel;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

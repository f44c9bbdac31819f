//! TUI pane rendering modules
//!
//! - [`screen`]: the character grid the program printed
//! - [`status`]: status bar with the run outcome and keybindings
//!
//! Each pane module exports a single stateless `render_*` function.

pub mod screen;
pub mod status;

pub use screen::render_screen_pane;
pub use status::render_status_bar;

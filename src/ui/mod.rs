//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state and the keyboard loop that waits for `q`
//! - **[`panes`]**: stateless render functions for the output grid and the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the
//! [`ScreenBuffer`] a run wrote into and call [`App::run`] to start the event loop.
//!
//! [`ScreenBuffer`]: crate::display::ScreenBuffer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

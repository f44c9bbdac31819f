//! Output surfaces for `print`
//!
//! The interpreter only knows the [`DisplaySink`] capability. Two sinks ship
//! with the crate:
//!
//! - [`Transcript`]: records every call in order; the plain, non-interactive
//!   output and the one tests inspect
//! - [`ScreenBuffer`]: a character grid that later writes overwrite, drawn by
//!   the terminal UI after the program halts
//!
//! Row 0, column 0 is the top-left corner. Rows grow downward and columns grow
//! to the right.

mod screen;
mod transcript;

pub use screen::ScreenBuffer;
pub use transcript::{RenderCall, Transcript};

/// Something that can place text at a screen coordinate
pub trait DisplaySink {
    fn render(&mut self, row: i32, col: i32, text: &str);
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn render(&mut self, row: i32, col: i32, text: &str) {
        (**self).render(row, col, text);
    }
}

//! # Introduction
//!
//! lineterp parses and executes a tiny line-numbered scripting language. Each
//! program line carries a line number, a command and up to three operands;
//! `print` places text at a (row, column) position on a character screen.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → Program → Interpreter → DisplaySink
//! ```
//!
//! 1. [`parser`]: splits lines into tokens and validates each command,
//!    declaring variables as `int` lines are seen.
//! 2. [`memory`]: the [`memory::variables::VariableTable`] holding every
//!    declared integer and whether it has been set.
//! 3. [`interpreter`]: the line-number driven state machine that runs the
//!    program once, from `begin` to `end`.
//! 4. [`display`]: the [`display::DisplaySink`] capability plus a recording
//!    [`display::Transcript`] and a [`display::ScreenBuffer`] grid.
//! 5. [`ui`]: ratatui-based screen that shows the grid after the run; not part
//!    of the stable library API.
//!
//! ## Example
//!
//! ```
//! use lineterp::display::Transcript;
//! use lineterp::interpreter::engine::Interpreter;
//! use lineterp::parser::parse::Parser;
//!
//! let source = "1 begin\n2 int x\n3 set x 5\n4 print x x hi\n5 end\n";
//! let program = Parser::new(source).parse_program().unwrap();
//! let mut transcript = Transcript::new();
//! Interpreter::new(program).run(&mut transcript).unwrap();
//! assert_eq!(transcript.get_output(), vec!["5 5 hi"]);
//! ```

pub mod display;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod ui;

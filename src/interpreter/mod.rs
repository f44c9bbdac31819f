//! Execution engine
//!
//! This module provides the interpreter state machine:
//! - [`engine`]: [`engine::Interpreter`], the step loop and control transfer
//! - [`errors`]: runtime error types
//! - [`constants`]: variable and name limits
//!
//! # Execution Model
//!
//! The program counter holds a line number, not an index. Each step finds the
//! first command carrying that line number, runs its handler, and moves to the
//! command after it in declaration order unless the handler asked for a jump
//! (`goto`) or a skip (false `if`). Execution stops once the program counter
//! reaches the `end` line.
//!
//! Handlers for the individual commands live in `arithmetic` and `jumps`.

mod arithmetic;
pub mod constants;
pub mod engine;
pub mod errors;
mod jumps;

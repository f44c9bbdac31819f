//! Program text parser
//!
//! This module turns program text into a validated [`ast::Program`]:
//! - [`lexer`]: splits source into lines of located tokens
//! - [`parse`]: validates each line and builds commands
//! - [`ast`]: command and program definitions
//!
//! # Grammar
//!
//! One command per non-blank line, whitespace separated:
//!
//! ```text
//! <lineNumber> int <name>
//! <lineNumber> set|add|sub|mult|div <name> <value>
//! <lineNumber> begin
//! <lineNumber> end
//! <lineNumber> print <rowVar> <colVar> <text>
//! <lineNumber> goto <lineNumber>
//! <lineNumber> if <left> eq|ne|gt|gte|lt|lte <right>
//! ```
//!
//! `print` text is a single token; there is no quoting and no way to embed
//! whitespace.

pub mod ast;
pub mod lexer;
pub mod parse;

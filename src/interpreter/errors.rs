//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! during program execution (as opposed to parse errors).
//!
//! All runtime errors are fatal - they halt execution and the run cannot be resumed.

use crate::parser::ast::LineNumber;
use std::fmt;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Variable was never declared, or an `if` operand is neither a set variable nor a literal
    UndefinedVariable { name: String, line: LineNumber },

    /// Variable is declared but has no value yet
    UnsetVariable { name: String, line: LineNumber },

    /// No command carries the requested line number
    UnknownLineNumber { target: LineNumber, line: LineNumber },

    /// `goto` outside `[begin_line, end_line]`
    InvalidGotoTarget {
        target: LineNumber,
        begin: LineNumber,
        end: LineNumber,
        line: LineNumber,
    },

    /// `div` by zero
    DivisionByZero { name: String, line: LineNumber },

    /// Result does not fit in a 32-bit signed integer
    IntegerOverflow {
        operation: String,
        line: LineNumber,
    },

    /// Fallthrough or an `if` skip moved past the last declared command
    RanPastLastCommand { line: LineNumber },

    /// Configured step limit reached before `end`
    StepLimitExceeded { limit: usize, line: LineNumber },
}

impl RuntimeError {
    /// Program counter at the time of the error
    pub fn line(&self) -> LineNumber {
        match self {
            RuntimeError::UndefinedVariable { line, .. }
            | RuntimeError::UnsetVariable { line, .. }
            | RuntimeError::UnknownLineNumber { line, .. }
            | RuntimeError::InvalidGotoTarget { line, .. }
            | RuntimeError::DivisionByZero { line, .. }
            | RuntimeError::IntegerOverflow { line, .. }
            | RuntimeError::RanPastLastCommand { line }
            | RuntimeError::StepLimitExceeded { line, .. } => *line,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UndefinedVariable { name, line } => {
                write!(f, "Error at line {}: {} is not defined", line, name)
            }
            RuntimeError::UnsetVariable { name, line } => {
                write!(f, "Error at line {}: Variable {} is not set", line, name)
            }
            RuntimeError::UnknownLineNumber { target, line } => {
                write!(
                    f,
                    "Error at line {}: Command at line {} not found",
                    line, target
                )
            }
            RuntimeError::InvalidGotoTarget {
                target,
                begin,
                end,
                line,
            } => {
                write!(
                    f,
                    "Error at line {}: Invalid line number {} (must be within {}..={})",
                    line, target, begin, end
                )
            }
            RuntimeError::DivisionByZero { name, line } => {
                write!(f, "Error at line {}: Division of {} by zero", line, name)
            }
            RuntimeError::IntegerOverflow { operation, line } => {
                write!(
                    f,
                    "Error at line {}: Integer overflow in operation: {}",
                    line, operation
                )
            }
            RuntimeError::RanPastLastCommand { line } => {
                write!(
                    f,
                    "Error at line {}: No command follows, but end has not been reached",
                    line
                )
            }
            RuntimeError::StepLimitExceeded { limit, line } => {
                write!(
                    f,
                    "Error at line {}: Step limit of {} exceeded",
                    line, limit
                )
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

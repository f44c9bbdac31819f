//! Program parser and validator
//!
//! This module provides the [`Parser`] struct and [`ParseError`], turning the
//! line tokens produced by the lexer into a validated [`Program`].
//!
//! # Validation order
//!
//! Every line is checked in the same order, and the first failure aborts the
//! whole parse:
//! 1. the line number must be a non-negative integer literal
//! 2. the keyword must be one of the eleven commands
//! 3. the operand count must match the command's arity
//! 4. operands are validated per command; `int` declares its variable here
//!
//! Once all lines are accepted the program must contain a `begin` and an
//! `end` command. Variables must be declared on an earlier line than any
//! `set`, arithmetic or `print` that names them.

use crate::interpreter::constants::Limits;
use crate::memory::variables::{VariableError, VariableTable};
use crate::parser::ast::*;
use crate::parser::lexer::{integer_literal, Lexer, Literal, SourceLine, Token};
use log::debug;
use std::fmt;

/// Errors that stop program construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line number, goto target or literal operand is not a valid integer
    NotAnInteger {
        token: String,
        line_number: Option<LineNumber>,
        location: SourceLocation,
    },

    /// Keyword is not one of the eleven commands (empty when missing)
    UnknownCommand {
        keyword: String,
        line_number: LineNumber,
        location: SourceLocation,
    },

    /// Operand count does not match the command
    WrongArity {
        kind: CommandKind,
        expected: usize,
        got: usize,
        line_number: LineNumber,
        location: SourceLocation,
    },

    /// `int` names a variable that already exists
    DuplicateVariable {
        name: String,
        line_number: LineNumber,
        location: SourceLocation,
    },

    /// Variable name longer than the configured maximum
    VariableNameTooLong {
        name: String,
        max: usize,
        line_number: LineNumber,
        location: SourceLocation,
    },

    /// Operand names a variable with no earlier `int`
    UndefinedVariable {
        name: String,
        line_number: LineNumber,
        location: SourceLocation,
    },

    /// `if` operator is not one of eq, ne, gt, gte, lt, lte
    InvalidOperator {
        op: String,
        line_number: LineNumber,
        location: SourceLocation,
    },

    /// Too many variables declared
    CapacityExceeded {
        limit: usize,
        line_number: LineNumber,
        location: SourceLocation,
    },

    /// No `begin` command anywhere in the program
    MissingBegin,

    /// No `end` command anywhere in the program
    MissingEnd,
}

impl ParseError {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            ParseError::NotAnInteger { location, .. }
            | ParseError::UnknownCommand { location, .. }
            | ParseError::WrongArity { location, .. }
            | ParseError::DuplicateVariable { location, .. }
            | ParseError::VariableNameTooLong { location, .. }
            | ParseError::UndefinedVariable { location, .. }
            | ParseError::InvalidOperator { location, .. }
            | ParseError::CapacityExceeded { location, .. } => Some(location),
            ParseError::MissingBegin | ParseError::MissingEnd => None,
        }
    }

    /// Declared line number of the offending command, when it got that far
    pub fn line_number(&self) -> Option<LineNumber> {
        match self {
            ParseError::NotAnInteger { line_number, .. } => *line_number,
            ParseError::UnknownCommand { line_number, .. }
            | ParseError::WrongArity { line_number, .. }
            | ParseError::DuplicateVariable { line_number, .. }
            | ParseError::VariableNameTooLong { line_number, .. }
            | ParseError::UndefinedVariable { line_number, .. }
            | ParseError::InvalidOperator { line_number, .. }
            | ParseError::CapacityExceeded { line_number, .. } => Some(*line_number),
            ParseError::MissingBegin | ParseError::MissingEnd => None,
        }
    }

    /// Whole-program errors rather than errors on a single line
    pub fn is_structural(&self) -> bool {
        matches!(self, ParseError::MissingBegin | ParseError::MissingEnd)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location() {
            write!(
                f,
                "Parse error at line {}, column {}: ",
                location.line, location.column
            )?;
        }

        match self {
            ParseError::NotAnInteger { token, .. } => {
                write!(f, "{} is not a non-negative integer", token)
            }
            ParseError::UnknownCommand {
                keyword,
                line_number,
                ..
            } => {
                if keyword.is_empty() {
                    write!(f, "missing command after line number {}", line_number)
                } else {
                    write!(f, "invalid command '{}' on line {}", keyword, line_number)
                }
            }
            ParseError::WrongArity {
                kind,
                expected,
                got,
                line_number,
                ..
            } => {
                write!(
                    f,
                    "'{}' on line {} expects {} argument{}, got {} (usage: {})",
                    kind,
                    line_number,
                    expected,
                    if *expected == 1 { "" } else { "s" },
                    got,
                    kind.usage()
                )
            }
            ParseError::DuplicateVariable {
                name, line_number, ..
            } => {
                write!(
                    f,
                    "variable {} is already defined (line {})",
                    name, line_number
                )
            }
            ParseError::VariableNameTooLong {
                name,
                max,
                line_number,
                ..
            } => {
                write!(
                    f,
                    "variable name {} is longer than {} characters (line {})",
                    name, max, line_number
                )
            }
            ParseError::UndefinedVariable {
                name, line_number, ..
            } => {
                write!(f, "variable {} is not defined (line {})", name, line_number)
            }
            ParseError::InvalidOperator {
                op, line_number, ..
            } => {
                write!(f, "invalid operator {} (line {})", op, line_number)
            }
            ParseError::CapacityExceeded {
                limit, line_number, ..
            } => {
                write!(
                    f,
                    "too many variables, at most {} allowed (line {})",
                    limit, line_number
                )
            }
            ParseError::MissingBegin => write!(f, "Error: No begin command"),
            ParseError::MissingEnd => write!(f, "Error: No end command"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Line-at-a-time parser for program text
pub struct Parser {
    lines: Vec<SourceLine>,
    limits: Limits,
    variables: VariableTable,
    begin_line: Option<LineNumber>,
    end_line: Option<LineNumber>,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::with_limits(source, Limits::default())
    }

    pub fn with_limits(source: &str, limits: Limits) -> Self {
        let mut lexer = Lexer::new(source);
        Parser {
            lines: lexer.tokenize(),
            limits,
            variables: VariableTable::with_capacity(limits.max_variables),
            begin_line: None,
            end_line: None,
        }
    }

    /// Parse and validate every line, then check for `begin` and `end`
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let lines = std::mem::take(&mut self.lines);
        let mut commands = Vec::with_capacity(lines.len());

        for line in &lines {
            let command = self.parse_line(line)?;
            debug!(
                "parsed line {} as {} {:?}",
                command.line_number,
                command.kind(),
                command.operands()
            );
            commands.push(command);
        }

        let begin_line = self.begin_line.ok_or(ParseError::MissingBegin)?;
        let end_line = self.end_line.ok_or(ParseError::MissingEnd)?;

        Ok(Program {
            commands,
            begin_line,
            end_line,
            variables: std::mem::take(&mut self.variables),
        })
    }

    fn parse_line(&mut self, line: &SourceLine) -> Result<Command, ParseError> {
        // Lexer never yields empty lines
        let first = &line.tokens[0];
        let line_number = Self::line_number_literal(first, None)?;

        let Some(keyword) = line.tokens.get(1) else {
            return Err(ParseError::UnknownCommand {
                keyword: String::new(),
                line_number,
                location: first.location,
            });
        };
        let kind: CommandKind =
            keyword
                .text
                .parse()
                .map_err(|_| ParseError::UnknownCommand {
                    keyword: keyword.text.clone(),
                    line_number,
                    location: keyword.location,
                })?;

        let args = &line.tokens[2..];
        if args.len() != kind.arity() {
            return Err(ParseError::WrongArity {
                kind,
                expected: kind.arity(),
                got: args.len(),
                line_number,
                location: keyword.location,
            });
        }

        let instruction = match kind {
            CommandKind::Int => {
                let name = self.variable_name(&args[0], line_number)?;
                self.variables
                    .declare(&name)
                    .map_err(|err| match err {
                        VariableError::Duplicate { name } => ParseError::DuplicateVariable {
                            name,
                            line_number,
                            location: args[0].location,
                        },
                        VariableError::CapacityExceeded { limit } => {
                            ParseError::CapacityExceeded {
                                limit,
                                line_number,
                                location: args[0].location,
                            }
                        }
                    })?;
                Instruction::Int { name }
            }
            CommandKind::Set => Instruction::Set {
                target: self.declared_name(&args[0], line_number)?,
                value: self.value_operand(&args[1], line_number)?,
            },
            CommandKind::Add | CommandKind::Sub | CommandKind::Mult | CommandKind::Div => {
                let op = match kind {
                    CommandKind::Add => ArithOp::Add,
                    CommandKind::Sub => ArithOp::Sub,
                    CommandKind::Mult => ArithOp::Mult,
                    _ => ArithOp::Div,
                };
                Instruction::Arith {
                    op,
                    target: self.declared_name(&args[0], line_number)?,
                    value: self.value_operand(&args[1], line_number)?,
                }
            }
            CommandKind::Print => Instruction::Print {
                row: self.declared_name(&args[0], line_number)?,
                col: self.declared_name(&args[1], line_number)?,
                text: args[2].text.clone(),
            },
            CommandKind::Goto => Instruction::Goto {
                target: Self::line_number_literal(&args[0], Some(line_number))?,
            },
            CommandKind::If => {
                let lhs = self.comparison_operand(&args[0], line_number)?;
                let op = args[1]
                    .text
                    .parse::<CompareOp>()
                    .map_err(|_| ParseError::InvalidOperator {
                        op: args[1].text.clone(),
                        line_number,
                        location: args[1].location,
                    })?;
                let rhs = self.comparison_operand(&args[2], line_number)?;
                Instruction::If { lhs, op, rhs }
            }
            CommandKind::Begin => {
                self.begin_line = Some(line_number);
                Instruction::Begin
            }
            CommandKind::End => {
                self.end_line = Some(line_number);
                Instruction::End
            }
        };

        Ok(Command {
            line_number,
            instruction,
            location: first.location,
        })
    }

    fn line_number_literal(
        token: &Token,
        line_number: Option<LineNumber>,
    ) -> Result<LineNumber, ParseError> {
        match integer_literal(&token.text) {
            Literal::Integer(n) if n >= 0 => Ok(n as LineNumber),
            _ => Err(ParseError::NotAnInteger {
                token: token.text.clone(),
                line_number,
                location: token.location,
            }),
        }
    }

    fn variable_name(&self, token: &Token, line_number: LineNumber) -> Result<String, ParseError> {
        if token.text.chars().count() > self.limits.max_name_len {
            return Err(ParseError::VariableNameTooLong {
                name: token.text.clone(),
                max: self.limits.max_name_len,
                line_number,
                location: token.location,
            });
        }
        Ok(token.text.clone())
    }

    fn declared_name(&self, token: &Token, line_number: LineNumber) -> Result<String, ParseError> {
        let name = self.variable_name(token, line_number)?;
        if self.variables.find_declared(&name).is_none() {
            return Err(ParseError::UndefinedVariable {
                name,
                line_number,
                location: token.location,
            });
        }
        Ok(name)
    }

    /// Second operand of `set`, `add`, `sub`, `mult` and `div`
    fn value_operand(&self, token: &Token, line_number: LineNumber) -> Result<Operand, ParseError> {
        match integer_literal(&token.text) {
            Literal::Integer(n) => Ok(Operand::Literal(n)),
            Literal::OutOfRange => Err(ParseError::NotAnInteger {
                token: token.text.clone(),
                line_number: Some(line_number),
                location: token.location,
            }),
            Literal::NotInteger => self
                .declared_name(token, line_number)
                .map(Operand::Variable),
        }
    }

    /// Either side of an `if`; names may be declared on a later line
    fn comparison_operand(
        &self,
        token: &Token,
        line_number: LineNumber,
    ) -> Result<Operand, ParseError> {
        if self.variables.find_declared(&token.text).is_some() {
            return Ok(Operand::Variable(token.text.clone()));
        }
        match integer_literal(&token.text) {
            Literal::Integer(n) => Ok(Operand::Literal(n)),
            Literal::OutOfRange => Err(ParseError::NotAnInteger {
                token: token.text.clone(),
                line_number: Some(line_number),
                location: token.location,
            }),
            Literal::NotInteger => self
                .variable_name(token, line_number)
                .map(Operand::Variable),
        }
    }
}

// Program representation for the line-numbered interpreter

use std::fmt;
use std::str::FromStr;

/// Line number declared at the start of every source line
pub type LineNumber = u32;

/// Source location information for error reporting (1-based file row and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The eleven command kinds of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Int,
    Set,
    Begin,
    End,
    Add,
    Sub,
    Mult,
    Div,
    Print,
    Goto,
    If,
}

impl CommandKind {
    pub const ALL: [CommandKind; 11] = [
        CommandKind::Int,
        CommandKind::Set,
        CommandKind::Begin,
        CommandKind::End,
        CommandKind::Add,
        CommandKind::Sub,
        CommandKind::Mult,
        CommandKind::Div,
        CommandKind::Print,
        CommandKind::Goto,
        CommandKind::If,
    ];

    /// Source keyword for this kind
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Int => "int",
            CommandKind::Set => "set",
            CommandKind::Begin => "begin",
            CommandKind::End => "end",
            CommandKind::Add => "add",
            CommandKind::Sub => "sub",
            CommandKind::Mult => "mult",
            CommandKind::Div => "div",
            CommandKind::Print => "print",
            CommandKind::Goto => "goto",
            CommandKind::If => "if",
        }
    }

    /// Number of operands the command takes
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Begin | CommandKind::End => 0,
            CommandKind::Int | CommandKind::Goto => 1,
            CommandKind::Set
            | CommandKind::Add
            | CommandKind::Sub
            | CommandKind::Mult
            | CommandKind::Div => 2,
            CommandKind::Print | CommandKind::If => 3,
        }
    }

    /// Usage line shown in arity errors
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Int => "int <var>",
            CommandKind::Set => "set <var> #",
            CommandKind::Begin => "begin",
            CommandKind::End => "end",
            CommandKind::Add => "add <var> #",
            CommandKind::Sub => "sub <var> #",
            CommandKind::Mult => "mult <var> #",
            CommandKind::Div => "div <var> #",
            CommandKind::Print => "print <var1> <var2> string",
            CommandKind::Goto => "goto <lineNumber>",
            CommandKind::If => "if <var> <op> <var>",
        }
    }
}

impl FromStr for CommandKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.keyword() == s)
            .ok_or(())
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Arithmetic applied in place by `add`, `sub`, `mult` and `div`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mult,
    Div,
}

impl ArithOp {
    pub fn kind(self) -> CommandKind {
        match self {
            ArithOp::Add => CommandKind::Add,
            ArithOp::Sub => CommandKind::Sub,
            ArithOp::Mult => CommandKind::Mult,
            ArithOp::Div => CommandKind::Div,
        }
    }
}

/// Comparison operators accepted by `if`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    pub fn evaluate(self, lhs: i32, rhs: i32) -> bool {
        match self {
            CompareOp::Eq => lhs == rhs,
            CompareOp::Ne => lhs != rhs,
            CompareOp::Gt => lhs > rhs,
            CompareOp::Gte => lhs >= rhs,
            CompareOp::Lt => lhs < rhs,
            CompareOp::Lte => lhs <= rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Ne => "ne",
            CompareOp::Gt => "gt",
            CompareOp::Gte => "gte",
            CompareOp::Lt => "lt",
            CompareOp::Lte => "lte",
        }
    }
}

impl FromStr for CompareOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(CompareOp::Eq),
            "ne" => Ok(CompareOp::Ne),
            "gt" => Ok(CompareOp::Gt),
            "gte" => Ok(CompareOp::Gte),
            "lt" => Ok(CompareOp::Lt),
            "lte" => Ok(CompareOp::Lte),
            _ => Err(()),
        }
    }
}

/// A value operand, classified once at parse time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(i32),
    Variable(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(n) => write!(f, "{}", n),
            Operand::Variable(name) => f.write_str(name),
        }
    }
}

/// Validated operands of a command, one variant per handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Int {
        name: String,
    },
    Set {
        target: String,
        value: Operand,
    },
    Begin,
    End,
    Arith {
        op: ArithOp,
        target: String,
        value: Operand,
    },
    Print {
        row: String,
        col: String,
        text: String,
    },
    Goto {
        target: LineNumber,
    },
    If {
        lhs: Operand,
        op: CompareOp,
        rhs: Operand,
    },
}

/// One parsed source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub line_number: LineNumber,
    pub instruction: Instruction,
    pub location: SourceLocation,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match &self.instruction {
            Instruction::Int { .. } => CommandKind::Int,
            Instruction::Set { .. } => CommandKind::Set,
            Instruction::Begin => CommandKind::Begin,
            Instruction::End => CommandKind::End,
            Instruction::Arith { op, .. } => op.kind(),
            Instruction::Print { .. } => CommandKind::Print,
            Instruction::Goto { .. } => CommandKind::Goto,
            Instruction::If { .. } => CommandKind::If,
        }
    }

    /// Operands as source tokens, left to right
    pub fn operands(&self) -> Vec<String> {
        match &self.instruction {
            Instruction::Begin | Instruction::End => Vec::new(),
            Instruction::Int { name } => vec![name.clone()],
            Instruction::Set { target, value } | Instruction::Arith { target, value, .. } => {
                vec![target.clone(), value.to_string()]
            }
            Instruction::Print { row, col, text } => {
                vec![row.clone(), col.clone(), text.clone()]
            }
            Instruction::Goto { target } => vec![target.to_string()],
            Instruction::If { lhs, op, rhs } => {
                vec![lhs.to_string(), op.symbol().to_string(), rhs.to_string()]
            }
        }
    }
}

/// A validated program: commands in declaration order plus the entry/exit lines
#[derive(Debug, Clone)]
pub struct Program {
    pub commands: Vec<Command>,
    pub begin_line: LineNumber,
    pub end_line: LineNumber,
    pub variables: crate::memory::variables::VariableTable,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8}{:<8}{:<8}Operands", "Index", "Line", "Command")?;
        for (i, cmd) in self.commands.iter().enumerate() {
            write!(f, "{:<8}{:<8}{:<8}", i, cmd.line_number, cmd.kind())?;
            writeln!(f, "{}", cmd.operands().join(" "))?;
        }
        Ok(())
    }
}

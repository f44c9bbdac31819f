// Execution engine for the line-numbered interpreter

use crate::display::DisplaySink;
use crate::interpreter::errors::RuntimeError;
use crate::memory::variables::VariableTable;
use crate::parser::ast::{Command, Instruction, LineNumber, Program};
use log::{debug, info, trace};

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt {
    /// Program counter reached `end_line`
    Normal,
    Error(RuntimeError),
}

/// Interpreter state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecState {
    Running,
    Halted(Halt),
}

/// Where control goes after a command has run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transfer {
    /// Next command in declaration order
    Next,
    /// Skip the next declared command (false `if`)
    SkipNext,
    /// Continue at this array index (`goto`)
    Jump(usize),
}

/// The interpreter that executes one program, once
pub struct Interpreter {
    /// Commands in declaration order
    commands: Vec<Command>,

    begin_line: LineNumber,
    end_line: LineNumber,

    /// Variables declared while parsing, mutated in place while running
    pub(crate) variables: VariableTable,

    /// Line number about to execute
    pc: LineNumber,

    state: ExecState,

    /// Number of commands executed so far
    steps: usize,

    /// Stop with an error after this many commands
    step_limit: Option<usize>,
}

impl Interpreter {
    /// Create an interpreter positioned at the program's `begin` line
    pub fn new(program: Program) -> Self {
        let Program {
            commands,
            begin_line,
            end_line,
            variables,
        } = program;

        Interpreter {
            commands,
            begin_line,
            end_line,
            variables,
            pc: begin_line,
            state: ExecState::Running,
            steps: 0,
            step_limit: None,
        }
    }

    /// Fail with [`RuntimeError::StepLimitExceeded`] after `limit` commands
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Run the program until it reaches `end` or fails
    pub fn run<S: DisplaySink + ?Sized>(&mut self, sink: &mut S) -> Result<(), RuntimeError> {
        info!(
            "running {} commands from line {} to line {}",
            self.commands.len(),
            self.begin_line,
            self.end_line
        );

        while self.is_running() {
            self.step(sink)?;
        }

        match &self.state {
            ExecState::Halted(Halt::Error(err)) => Err(err.clone()),
            _ => {
                info!("finished after {} steps", self.steps);
                Ok(())
            }
        }
    }

    /// Execute the command at the program counter.
    ///
    /// Once halted, stepping does nothing: a normal halt returns `Ok(())` and
    /// an error halt returns the same error again.
    pub fn step<S: DisplaySink + ?Sized>(&mut self, sink: &mut S) -> Result<(), RuntimeError> {
        match &self.state {
            ExecState::Halted(Halt::Normal) => return Ok(()),
            ExecState::Halted(Halt::Error(err)) => return Err(err.clone()),
            ExecState::Running => {}
        }

        if self.pc >= self.end_line {
            self.halt(Halt::Normal);
            return Ok(());
        }

        match self.execute_current(sink) {
            Ok(()) => {
                if self.pc >= self.end_line {
                    self.halt(Halt::Normal);
                }
                Ok(())
            }
            Err(err) => {
                self.halt(Halt::Error(err.clone()));
                Err(err)
            }
        }
    }

    fn halt(&mut self, halt: Halt) {
        debug!("halted at line {}: {:?}", self.pc, halt);
        self.state = ExecState::Halted(halt);
    }

    fn execute_current<S: DisplaySink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<(), RuntimeError> {
        let line = self.pc;

        if let Some(limit) = self.step_limit {
            if self.steps >= limit {
                return Err(RuntimeError::StepLimitExceeded { limit, line });
            }
        }

        let index = self
            .index_of(line)
            .ok_or(RuntimeError::UnknownLineNumber { target: line, line })?;
        let instruction = self.commands[index].instruction.clone();
        self.steps += 1;
        trace!("step {}: line {} {:?}", self.steps, line, instruction);

        let transfer = match &instruction {
            // Declared while parsing; nothing left to do
            Instruction::Int { .. } | Instruction::Begin | Instruction::End => Transfer::Next,
            Instruction::Set { target, value } => self.execute_set(target, value, line)?,
            Instruction::Arith { op, target, value } => {
                self.execute_arith(*op, target, value, line)?
            }
            Instruction::Print { row, col, text } => {
                self.execute_print(row, col, text, sink, line)?
            }
            Instruction::Goto { target } => self.execute_goto(*target, line)?,
            Instruction::If { lhs, op, rhs } => self.execute_if(lhs, *op, rhs, line)?,
        };

        let next = match transfer {
            Transfer::Next => index + 1,
            Transfer::SkipNext => index + 2,
            Transfer::Jump(target) => target,
        };

        self.pc = self
            .commands
            .get(next)
            .map(|cmd| cmd.line_number)
            .ok_or(RuntimeError::RanPastLastCommand { line })?;
        Ok(())
    }

    /// Array index of the first command with `line_number`; linear scan
    pub(crate) fn index_of(&self, line_number: LineNumber) -> Option<usize> {
        self.commands
            .iter()
            .position(|cmd| cmd.line_number == line_number)
    }

    // ===== Accessors =====

    pub fn state(&self) -> &ExecState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ExecState::Running)
    }

    pub fn program_counter(&self) -> LineNumber {
        self.pc
    }

    pub fn begin_line(&self) -> LineNumber {
        self.begin_line
    }

    pub fn end_line(&self) -> LineNumber {
        self.end_line
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// Current value of a set variable
    pub fn value_of(&self, name: &str) -> Option<i32> {
        self.variables
            .find_set(name)
            .map(|slot| self.variables.get(slot))
    }
}

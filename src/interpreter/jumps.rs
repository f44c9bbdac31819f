use crate::interpreter::engine::{Interpreter, Transfer};
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{CompareOp, LineNumber, Operand};
use crate::parser::lexer::{integer_literal, Literal};

impl Interpreter {
    pub(crate) fn execute_goto(
        &mut self,
        target: LineNumber,
        line: LineNumber,
    ) -> Result<Transfer, RuntimeError> {
        let (begin, end) = (self.begin_line(), self.end_line());
        if target < begin || target > end {
            return Err(RuntimeError::InvalidGotoTarget {
                target,
                begin,
                end,
                line,
            });
        }

        self.index_of(target)
            .map(Transfer::Jump)
            .ok_or(RuntimeError::UnknownLineNumber { target, line })
    }

    /// A false condition skips the next declared command
    pub(crate) fn execute_if(
        &mut self,
        lhs: &Operand,
        op: CompareOp,
        rhs: &Operand,
        line: LineNumber,
    ) -> Result<Transfer, RuntimeError> {
        let lhs = self.resolve_comparison(lhs, line)?;
        let rhs = self.resolve_comparison(rhs, line)?;

        if op.evaluate(lhs, rhs) {
            Ok(Transfer::Next)
        } else {
            Ok(Transfer::SkipNext)
        }
    }

    /// A set variable wins over a literal reading of the same token
    fn resolve_comparison(&self, operand: &Operand, line: LineNumber) -> Result<i32, RuntimeError> {
        match operand {
            Operand::Literal(n) => Ok(*n),
            Operand::Variable(name) => {
                if let Some(slot) = self.variables.find_set(name) {
                    return Ok(self.variables.get(slot));
                }
                match integer_literal(name) {
                    Literal::Integer(n) => Ok(n),
                    _ => Err(RuntimeError::UndefinedVariable {
                        name: name.clone(),
                        line,
                    }),
                }
            }
        }
    }
}

//! Variable assignment, arithmetic and `print`
//!
//! Adds `impl Interpreter` handlers for the commands that read or write
//! variable slots. Each handler applies its effect to the variable table and
//! returns the [`Transfer`] the engine should follow, which here is always
//! plain fallthrough.
//!
//! Arithmetic is checked: a result outside `i32` is an
//! [`RuntimeError::IntegerOverflow`] rather than a wrapped value, and a zero
//! divisor is caught before dividing.

use crate::display::DisplaySink;
use crate::interpreter::engine::{Interpreter, Transfer};
use crate::interpreter::errors::RuntimeError;
use crate::memory::variables::SlotId;
use crate::parser::ast::{ArithOp, LineNumber, Operand};

impl Interpreter {
    /// `set var value`: initializes or overwrites, the target need not be set
    pub(crate) fn execute_set(
        &mut self,
        target: &str,
        value: &Operand,
        line: LineNumber,
    ) -> Result<Transfer, RuntimeError> {
        let slot =
            self.variables
                .find_declared(target)
                .ok_or_else(|| RuntimeError::UndefinedVariable {
                    name: target.to_string(),
                    line,
                })?;
        let value = self.resolve_value(value, line)?;
        self.variables.set(slot, value);
        Ok(Transfer::Next)
    }

    /// `add|sub|mult|div var value`: the target must already hold a value
    pub(crate) fn execute_arith(
        &mut self,
        op: ArithOp,
        target: &str,
        value: &Operand,
        line: LineNumber,
    ) -> Result<Transfer, RuntimeError> {
        let slot = self.set_slot(target, line)?;
        let lhs = self.variables.get(slot);
        let rhs = self.resolve_value(value, line)?;

        let result = match op {
            ArithOp::Add => lhs.checked_add(rhs),
            ArithOp::Sub => lhs.checked_sub(rhs),
            ArithOp::Mult => lhs.checked_mul(rhs),
            ArithOp::Div => {
                if rhs == 0 {
                    return Err(RuntimeError::DivisionByZero {
                        name: target.to_string(),
                        line,
                    });
                }
                lhs.checked_div(rhs)
            }
        };

        let result = result.ok_or_else(|| RuntimeError::IntegerOverflow {
            operation: format!("{} {} {}", op.kind(), lhs, rhs),
            line,
        })?;
        self.variables.set(slot, result);
        Ok(Transfer::Next)
    }

    /// `print rowVar colVar text`
    pub(crate) fn execute_print<S: DisplaySink + ?Sized>(
        &mut self,
        row: &str,
        col: &str,
        text: &str,
        sink: &mut S,
        line: LineNumber,
    ) -> Result<Transfer, RuntimeError> {
        let row = self.variables.get(self.set_slot(row, line)?);
        let col = self.variables.get(self.set_slot(col, line)?);
        sink.render(row, col, text);
        Ok(Transfer::Next)
    }

    /// Value operand of `set` and the arithmetic commands
    fn resolve_value(&self, value: &Operand, line: LineNumber) -> Result<i32, RuntimeError> {
        match value {
            Operand::Literal(n) => Ok(*n),
            Operand::Variable(name) => Ok(self.variables.get(self.set_slot(name, line)?)),
        }
    }

    /// Slot of a variable that holds a value
    fn set_slot(&self, name: &str, line: LineNumber) -> Result<SlotId, RuntimeError> {
        if let Some(slot) = self.variables.find_set(name) {
            return Ok(slot);
        }
        if self.variables.find_declared(name).is_some() {
            Err(RuntimeError::UnsetVariable {
                name: name.to_string(),
                line,
            })
        } else {
            Err(RuntimeError::UndefinedVariable {
                name: name.to_string(),
                line,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::display::Transcript;
    use crate::interpreter::engine::Interpreter;
    use crate::interpreter::errors::RuntimeError;
    use crate::parser::parse::Parser;

    fn run(source: &str) -> (Interpreter, Transcript, Result<(), RuntimeError>) {
        let program = Parser::new(source).parse_program().unwrap();
        let mut interp = Interpreter::new(program);
        let mut transcript = Transcript::new();
        let result = interp.run(&mut transcript);
        (interp, transcript, result)
    }

    #[test]
    fn test_arithmetic_in_place() {
        let (interp, _, result) = run("\
1 begin
2 int x
3 set x 10
4 add x 5
5 sub x -3
6 mult x 2
7 div x 4
8 end");
        assert!(result.is_ok(), "{:?}", result);
        assert_eq!(interp.value_of("x"), Some(9));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        let (interp, _, result) = run("1 begin\n2 int x\n3 set x -7\n4 div x 2\n5 end");
        assert!(result.is_ok());
        assert_eq!(interp.value_of("x"), Some(-3));
    }

    #[test]
    fn test_variable_operands() {
        let (interp, _, result) = run("\
1 begin
2 int x
3 int step
4 set step 3
5 set x step
6 mult x step
7 end");
        assert!(result.is_ok(), "{:?}", result);
        assert_eq!(interp.value_of("x"), Some(9));
    }

    #[test]
    fn test_set_overwrites() {
        let (interp, _, _) = run("1 begin\n2 int x\n3 set x 1\n4 set x 2\n5 end");
        assert_eq!(interp.value_of("x"), Some(2));
    }

    #[test]
    fn test_unset_target() {
        for op in ["add", "sub", "mult", "div"] {
            let source = format!("1 begin\n2 int x\n3 {} x 1\n4 end", op);
            let (_, _, result) = run(&source);
            assert!(
                matches!(result, Err(RuntimeError::UnsetVariable { ref name, line: 3 }) if name == "x"),
                "{}: {:?}",
                op,
                result
            );
        }
    }

    #[test]
    fn test_unset_value_operand() {
        let (_, _, result) = run("1 begin\n2 int x\n3 int y\n4 set x 1\n5 add x y\n6 end");
        assert!(matches!(
            result,
            Err(RuntimeError::UnsetVariable { ref name, line: 5 }) if name == "y"
        ));
    }

    #[test]
    fn test_division_by_zero() {
        let (interp, _, result) = run("1 begin\n2 int x\n3 set x 8\n4 div x 0\n5 end");
        assert!(matches!(
            result,
            Err(RuntimeError::DivisionByZero { line: 4, .. })
        ));
        assert_eq!(interp.value_of("x"), Some(8));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let (_, _, result) = run("1 begin\n2 int x\n3 set x 2147483647\n4 add x 1\n5 end");
        assert!(matches!(
            result,
            Err(RuntimeError::IntegerOverflow { line: 4, .. })
        ));

        let (_, _, result) = run("1 begin\n2 int x\n3 set x -2147483648\n4 div x -1\n5 end");
        assert!(matches!(result, Err(RuntimeError::IntegerOverflow { .. })));
    }

    #[test]
    fn test_print_uses_values_as_coordinates() {
        let (_, transcript, result) = run("\
1 begin
2 int r
3 int c
4 set r 3
5 set c 12
6 print r c score
7 end");
        assert!(result.is_ok());
        assert_eq!(transcript.get_output(), vec!["3 12 score"]);
    }

    #[test]
    fn test_print_requires_set_variables() {
        let (_, transcript, result) = run("1 begin\n2 int r\n3 int c\n4 set r 1\n5 print r c x\n6 end");
        assert!(matches!(
            result,
            Err(RuntimeError::UnsetVariable { ref name, line: 5 }) if name == "c"
        ));
        assert!(transcript.is_empty());
    }
}

//! Variable storage for the interpreter
//!
//! - [`variables`]: the [`variables::VariableTable`] symbol table and its
//!   integer slots
//!
//! Variables are declared by `int` commands while parsing and only ever
//! mutated in place while executing. There is no scoping and no deletion; the
//! whole table is dropped with the interpreter that owns it.

pub mod variables;

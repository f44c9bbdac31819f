//! Symbol table and integer storage
//!
//! This module provides:
//! - [`VariableTable`]: declared variables in declaration order, indexed by name
//! - [`VariableSlot`]: a single variable's value together with its `is_set` flag
//! - [`SlotId`]: a stable handle into the table
//!
//! # Set tracking
//!
//! A slot exists from the moment its `int` command is parsed, but its value
//! is meaningless until [`VariableTable::set`] is called. Lookups that need a
//! usable value go through [`VariableTable::find_set`], which ignores slots
//! that were declared but never assigned.

use crate::interpreter::constants::MAX_VARIABLES;
use rustc_hash::FxHashMap;
use std::fmt;

/// Handle to a declared variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

/// Storage for one declared variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSlot {
    pub name: String,
    pub value: i32,
    pub is_set: bool,
}

/// Errors raised by table bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableError {
    /// Name is already declared
    Duplicate { name: String },
    /// Declaring would exceed the configured capacity
    CapacityExceeded { limit: usize },
}

impl fmt::Display for VariableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableError::Duplicate { name } => {
                write!(f, "Variable '{}' is already defined", name)
            }
            VariableError::CapacityExceeded { limit } => {
                write!(f, "Too many variables: at most {} may be declared", limit)
            }
        }
    }
}

impl std::error::Error for VariableError {}

/// Declared variables, in declaration order
#[derive(Debug, Clone)]
pub struct VariableTable {
    slots: Vec<VariableSlot>,
    by_name: FxHashMap<String, SlotId>,
    capacity: usize,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::with_capacity(MAX_VARIABLES)
    }

    /// Create a table that refuses declarations past `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        VariableTable {
            slots: Vec::new(),
            by_name: FxHashMap::default(),
            capacity,
        }
    }

    /// Allocate an unset slot for `name`
    pub fn declare(&mut self, name: &str) -> Result<SlotId, VariableError> {
        if self.by_name.contains_key(name) {
            return Err(VariableError::Duplicate {
                name: name.to_string(),
            });
        }
        if self.slots.len() >= self.capacity {
            return Err(VariableError::CapacityExceeded {
                limit: self.capacity,
            });
        }

        let id = SlotId(self.slots.len());
        self.slots.push(VariableSlot {
            name: name.to_string(),
            value: 0,
            is_set: false,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn find_declared(&self, name: &str) -> Option<SlotId> {
        self.by_name.get(name).copied()
    }

    /// Like [`find_declared`](Self::find_declared), but only for slots holding a value
    pub fn find_set(&self, name: &str) -> Option<SlotId> {
        self.find_declared(name)
            .filter(|id| self.slots[id.0].is_set)
    }

    pub fn get(&self, slot: SlotId) -> i32 {
        self.slots[slot.0].value
    }

    /// Store `value` and mark the slot as set
    pub fn set(&mut self, slot: SlotId, value: i32) {
        let entry = &mut self.slots[slot.0];
        entry.value = value;
        entry.is_set = true;
    }

    pub fn slot(&self, slot: SlotId) -> &VariableSlot {
        &self.slots[slot.0]
    }

    /// Slots in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &VariableSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_find() {
        let mut table = VariableTable::new();
        let x = table.declare("x").unwrap();
        let y = table.declare("y").unwrap();

        assert_ne!(x, y);
        assert_eq!(table.find_declared("x"), Some(x));
        assert_eq!(table.find_declared("z"), None);
        assert_eq!(table.len(), 2);

        let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_duplicate_declaration() {
        let mut table = VariableTable::new();
        table.declare("count").unwrap();
        let err = table.declare("count").unwrap_err();

        assert_eq!(
            err,
            VariableError::Duplicate {
                name: "count".to_string()
            }
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_find_set_ignores_unset_slots() {
        let mut table = VariableTable::new();
        let x = table.declare("x").unwrap();

        assert_eq!(table.find_set("x"), None);
        assert!(!table.slot(x).is_set);

        table.set(x, -12);
        assert_eq!(table.find_set("x"), Some(x));
        assert_eq!(table.get(x), -12);
        assert!(table.slot(x).is_set);
    }

    #[test]
    fn test_capacity_limit() {
        let mut table = VariableTable::with_capacity(2);
        table.declare("a").unwrap();
        table.declare("b").unwrap();

        assert_eq!(
            table.declare("c"),
            Err(VariableError::CapacityExceeded { limit: 2 })
        );
        assert_eq!(table.find_declared("c"), None);
    }

    #[test]
    fn test_default_capacity() {
        let mut table = VariableTable::default();
        for i in 0..MAX_VARIABLES {
            table.declare(&format!("v{}", i)).unwrap();
        }
        assert!(matches!(
            table.declare("overflow"),
            Err(VariableError::CapacityExceeded { .. })
        ));
    }
}

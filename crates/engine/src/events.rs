//! Validation feedback events.
//!
//! The session fires these after debounced validation runs so a UI can
//! mark cells valid/invalid without polling. The collector exists for
//! tests that need to assert on event ordering.

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

/// Outcome of validating one in-flight cell edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationEvent {
    pub row: usize,
    pub column: String,
    pub value: Value,
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Callback type for receiving validation events.
pub type ValidationCallback = Box<dyn FnMut(&ValidationEvent)>;

/// Shared event sink for tests.
#[derive(Default, Clone)]
pub struct EventCollector {
    events: Rc<RefCell<Vec<ValidationEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends every event to this collector.
    pub fn callback(&self) -> ValidationCallback {
        let events = Rc::clone(&self.events);
        Box::new(move |event| events.borrow_mut().push(event.clone()))
    }

    pub fn events(&self) -> Vec<ValidationEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Events for a single cell, in arrival order.
    pub fn for_cell(&self, row: usize, column: &str) -> Vec<ValidationEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.row == row && e.column == column)
            .cloned()
            .collect()
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use crate::ds::value::{SequenceType, Value};

/// Ordered, index-addressed container backing `Value::Sequence`.
pub struct SequenceData {
    elements: Vec<Value>,
}

impl SequenceData {
    pub fn new() -> Self {
        SequenceData {
            elements: Vec::new(),
        }
    }

    pub fn new_ref() -> SequenceType {
        Rc::new(RefCell::new(SequenceData::new()))
    }

    pub fn from_elements(elements: Vec<Value>) -> Self {
        SequenceData { elements }
    }

    pub fn ref_from_elements(elements: Vec<Value>) -> SequenceType {
        Rc::new(RefCell::new(SequenceData::from_elements(elements)))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn push(&mut self, value: Value) {
        self.elements.push(value);
    }

    /// Writes past the end pad the gap with `Undefined`.
    pub fn set(&mut self, index: usize, value: Value) {
        if index < self.elements.len() {
            self.elements[index] = value;
        } else {
            while self.elements.len() < index {
                self.elements.push(Value::Undefined);
            }
            self.elements.push(value);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }
}

impl Default for SequenceData {
    fn default() -> Self {
        Self::new()
    }
}

//! Per-call identity bookkeeping for the clone engine.
//!
//! An `Identity` is a stable handle unique to one in-memory container
//! instance, derived from its `Rc` allocation address. It is only
//! meaningful while the source graph is alive, which holds for the whole
//! of a clone call because the caller owns the graph. The `IdentityMemo`
//! maps source-node identities to already-produced output nodes; it is
//! allocated fresh for every top-level clone call and dropped on return.

use std::collections::HashMap;
use std::rc::Rc;

use crate::ds::value::{OpaqueType, RecordType, SequenceType, Value};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Identity(usize);

impl Identity {
    pub fn of_sequence(sequence: &SequenceType) -> Identity {
        Identity(Rc::as_ptr(sequence) as *const () as usize)
    }

    pub fn of_record(record: &RecordType) -> Identity {
        Identity(Rc::as_ptr(record) as *const () as usize)
    }

    pub fn of_foreign(foreign: &OpaqueType) -> Identity {
        Identity(Rc::as_ptr(foreign) as *const () as usize)
    }
}

/// Mapping from source-node identity to already-built output node.
pub struct IdentityMemo {
    produced: HashMap<Identity, Value>,
}

impl IdentityMemo {
    pub fn new() -> Self {
        IdentityMemo {
            produced: HashMap::new(),
        }
    }

    pub fn get(&self, id: &Identity) -> Option<&Value> {
        self.produced.get(id)
    }

    pub fn insert(&mut self, id: Identity, output: Value) {
        self.produced.insert(id, output);
    }

    pub fn len(&self) -> usize {
        self.produced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.produced.is_empty()
    }
}

impl Default for IdentityMemo {
    fn default() -> Self {
        Self::new()
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::map::Iter;
use indexmap::IndexMap;

use crate::ds::value::{RecordType, Value};

/// Plain keyed container backing `Value::Record`.
///
/// Insertion order is irrelevant to correctness but preserved for
/// determinism: iteration yields keys in first-insertion order, and
/// re-assigning an existing key keeps its original position.
pub struct RecordData {
    properties: IndexMap<String, Value>,
}

impl RecordData {
    pub fn new() -> Self {
        RecordData {
            properties: IndexMap::new(),
        }
    }

    pub fn new_ref() -> RecordType {
        Rc::new(RefCell::new(RecordData::new()))
    }

    pub fn from_entries(entries: Vec<(String, Value)>) -> Self {
        let mut record = RecordData::new();
        for (key, value) in entries {
            record.set(key, value);
        }
        record
    }

    pub fn ref_from_entries(entries: Vec<(String, Value)>) -> RecordType {
        Rc::new(RefCell::new(RecordData::from_entries(entries)))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn set(&mut self, key: String, value: Value) {
        self.properties.insert(key, value);
    }

    /// Removes a key, keeping the order of the remaining entries stable.
    pub fn delete(&mut self, key: &str) -> bool {
        self.properties.shift_remove(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.properties.iter()
    }

    /// Snapshot of all entries as cheap handle clones. Used by the merge
    /// engine so a source can be walked while the target is mutated.
    pub fn entries_cloned(&self) -> Vec<(String, Value)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl Default for RecordData {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::value::NumberType;

    fn int(n: i64) -> Value {
        Value::Number(NumberType::Integer(n))
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut r = RecordData::new();
        r.set("b".to_string(), int(1));
        r.set("a".to_string(), int(2));
        r.set("c".to_string(), int(3));
        let keys: Vec<&String> = r.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reassignment_keeps_position() {
        let mut r = RecordData::new();
        r.set("b".to_string(), int(1));
        r.set("a".to_string(), int(2));
        r.set("b".to_string(), int(9));
        let keys: Vec<&String> = r.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(r.get("b"), Some(&int(9)));
    }

    #[test]
    fn test_delete_keeps_remaining_order() {
        let mut r = RecordData::new();
        r.set("b".to_string(), int(1));
        r.set("a".to_string(), int(2));
        r.set("c".to_string(), int(3));
        assert!(r.delete("a"));
        assert!(!r.delete("a"));
        let keys: Vec<&String> = r.keys().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }
}

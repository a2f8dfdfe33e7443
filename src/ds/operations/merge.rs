//! The merge engine: deep/shallow extend of one or more source graphs
//! into a mutable target record.
//!
//! Sources are processed left to right; later sources override earlier
//! ones and the target itself. With `deep = false` this degenerates to a
//! one-level overwrite. Unlike the clone engine, merge carries no identity
//! memo: its depth is bounded by source nesting, and the only loop guarded
//! against is assigning a node into itself (the classic `a.self = a;
//! merge(a, a)` case). Two distinct graphs that cross-reference each other
//! are a caller hazard, as in the original.

use crate::ds::memo::Identity;
use crate::ds::operations::classify::{classify, Category};
use crate::ds::record::RecordData;
use crate::ds::sequence::SequenceData;
use crate::ds::value::{RecordType, SequenceType, Value};

/// Merges `sources` into `target` and returns it.
///
/// A target that is not a `Record` is replaced by a fresh empty record
/// before processing — generic keyed assignment is only safe on plain
/// records. Sources that are `Null`/`Undefined`, or that carry no keyed
/// entries, are skipped. A source entry whose value is `Undefined` leaves
/// the corresponding target entry untouched.
pub fn merge(deep: bool, target: Value, sources: &[Value]) -> Value {
    let target_record = match target {
        Value::Record(r) => r,
        _ => RecordData::new_ref(),
    };
    for source in sources {
        if let Value::Record(source_record) = source {
            merge_record(deep, &target_record, source_record);
        }
    }
    Value::Record(target_record)
}

fn merge_record(deep: bool, target: &RecordType, source: &RecordType) {
    let target_id = Identity::of_record(target);
    // Snapshot first: the guarded self-merge case walks the node it is
    // about to mutate.
    let entries = source.borrow().entries_cloned();
    for (name, copy) in entries {
        // Self-assignment guard.
        if copy.identity() == Some(target_id) {
            continue;
        }
        let category = classify(&copy);
        if deep && category.is_container() {
            let existing = target.borrow().get(&name).cloned();
            let merged = merge_child(deep, existing, &copy, category);
            target.borrow_mut().set(name, merged);
        } else if !copy.is_undefined() {
            target.borrow_mut().set(name, copy);
        }
    }
}

fn merge_sequence(deep: bool, target: &SequenceType, source: &SequenceType) {
    let target_id = Identity::of_sequence(target);
    let elements: Vec<Value> = source.borrow().iter().cloned().collect();
    for (index, copy) in elements.into_iter().enumerate() {
        if copy.identity() == Some(target_id) {
            continue;
        }
        let category = classify(&copy);
        if deep && category.is_container() {
            let existing = target.borrow().get(index).cloned();
            let merged = merge_child(deep, existing, &copy, category);
            target.borrow_mut().set(index, merged);
        } else if !copy.is_undefined() {
            target.borrow_mut().set(index, copy);
        }
    }
}

/// Deep-merge tie-break: the existing target value is reused as the
/// recursive target only when its category matches the source's; a
/// mismatch always replaces, never coerces.
fn merge_child(deep: bool, existing: Option<Value>, copy: &Value, category: Category) -> Value {
    match category {
        Category::Sequence => {
            let output = match existing {
                Some(Value::Sequence(s)) => s,
                _ => SequenceData::new_ref(),
            };
            if let Value::Sequence(source) = copy {
                merge_sequence(deep, &output, source);
            }
            Value::Sequence(output)
        }
        Category::Record => {
            let output = match existing {
                Some(Value::Record(r)) => r,
                _ => RecordData::new_ref(),
            };
            if let Value::Record(source) = copy {
                merge_record(deep, &output, source);
            }
            Value::Record(output)
        }
        _ => unreachable!(),
    }
}

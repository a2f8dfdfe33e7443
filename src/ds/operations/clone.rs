//! The clone engine: structural duplication of arbitrary value graphs.
//!
//! Cycles and shared substructure are resolved through a per-call
//! [`IdentityMemo`]: an output container is registered under its source's
//! identity *before* its children are visited, so any child that loops
//! back finds the (still filling) output node and aliases it. The result
//! is a fresh graph with the same topology as the source, sharing only
//! leaves that cannot be duplicated.
//!
//! Recursion depth equals the nesting depth of the input. That is fine
//! for graphs whose shape the caller controls; for untrusted or very deep
//! inputs use [`clone_value_iterative`], which carries the traversal on an
//! explicit worklist instead of the call stack. Both engines produce
//! indistinguishable output.

use crate::ds::memo::{Identity, IdentityMemo};
use crate::ds::operations::classify::{classify, Category};
use crate::ds::record::RecordData;
use crate::ds::sequence::SequenceData;
use crate::ds::value::{RecordType, SequenceType, Value};

/// Returns an independent structural duplicate of `value`.
///
/// - `Null`, `Undefined` and primitives are returned as plain copies.
/// - `Date` and `Pattern` leaves become fresh leaves with the same content.
/// - `Opaque` leaves are passed through by reference, never duplicated.
/// - `Sequence` and `Record` nodes are rebuilt; a node visited twice in
///   one call (sharing or a cycle) maps to a single output node.
///
/// The source graph is never mutated.
pub fn clone_value(value: &Value) -> Value {
    let mut memo = IdentityMemo::new();
    clone_with_memo(value, &mut memo)
}

fn clone_with_memo(value: &Value, memo: &mut IdentityMemo) -> Value {
    match classify(value) {
        Category::Null
        | Category::Primitive
        | Category::DateLike
        | Category::PatternLike
        | Category::Opaque => value.clone(),
        Category::Sequence => {
            if let Value::Sequence(source) = value {
                let id = Identity::of_sequence(source);
                if let Some(produced) = memo.get(&id) {
                    return produced.clone();
                }
                let output = SequenceData::new_ref();
                // Register before descending so a child that refers back to
                // this node finds the output already present.
                memo.insert(id, Value::Sequence(output.clone()));
                let elements = source.borrow();
                for child in elements.iter() {
                    let copied = clone_with_memo(child, memo);
                    output.borrow_mut().push(copied);
                }
                Value::Sequence(output)
            } else {
                unreachable!()
            }
        }
        Category::Record => {
            if let Value::Record(source) = value {
                let id = Identity::of_record(source);
                if let Some(produced) = memo.get(&id) {
                    return produced.clone();
                }
                let output = RecordData::new_ref();
                memo.insert(id, Value::Record(output.clone()));
                let properties = source.borrow();
                for (key, child) in properties.iter() {
                    let copied = clone_with_memo(child, memo);
                    output.borrow_mut().set(key.clone(), copied);
                }
                Value::Record(output)
            } else {
                unreachable!()
            }
        }
    }
}

enum FillTask {
    Sequence {
        source: SequenceType,
        output: SequenceType,
    },
    Record {
        source: RecordType,
        output: RecordType,
    },
}

/// Explicit-worklist variant of [`clone_value`]. Same semantics, bounded
/// stack usage regardless of input depth.
pub fn clone_value_iterative(value: &Value) -> Value {
    let mut memo = IdentityMemo::new();
    let mut work: Vec<FillTask> = Vec::new();
    let root = clone_shallow(value, &mut memo, &mut work);
    while let Some(task) = work.pop() {
        match task {
            FillTask::Sequence { source, output } => {
                let elements = source.borrow();
                for child in elements.iter() {
                    let copied = clone_shallow(child, &mut memo, &mut work);
                    output.borrow_mut().push(copied);
                }
            }
            FillTask::Record { source, output } => {
                let properties = source.borrow();
                for (key, child) in properties.iter() {
                    let copied = clone_shallow(child, &mut memo, &mut work);
                    output.borrow_mut().set(key.clone(), copied);
                }
            }
        }
    }
    root
}

/// One level of the worklist engine: leaves are copied outright, container
/// nodes get an empty memoized output and a pending fill task.
fn clone_shallow(value: &Value, memo: &mut IdentityMemo, work: &mut Vec<FillTask>) -> Value {
    match classify(value) {
        Category::Null
        | Category::Primitive
        | Category::DateLike
        | Category::PatternLike
        | Category::Opaque => value.clone(),
        Category::Sequence => {
            if let Value::Sequence(source) = value {
                let id = Identity::of_sequence(source);
                if let Some(produced) = memo.get(&id) {
                    return produced.clone();
                }
                let output = SequenceData::new_ref();
                memo.insert(id, Value::Sequence(output.clone()));
                work.push(FillTask::Sequence {
                    source: source.clone(),
                    output: output.clone(),
                });
                Value::Sequence(output)
            } else {
                unreachable!()
            }
        }
        Category::Record => {
            if let Value::Record(source) = value {
                let id = Identity::of_record(source);
                if let Some(produced) = memo.get(&id) {
                    return produced.clone();
                }
                let output = RecordData::new_ref();
                memo.insert(id, Value::Record(output.clone()));
                work.push(FillTask::Record {
                    source: source.clone(),
                    output: output.clone(),
                });
                Value::Record(output)
            } else {
                unreachable!()
            }
        }
    }
}

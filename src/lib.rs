//! # graphcopy - Structural graph copy/merge engine
//!
//! Deep-copies and deep-merges arbitrary, possibly self-referential,
//! heterogeneous value graphs:
//! - Tagged value model with explicit opaque (foreign) leaves
//! - Clone engine with per-call identity memo: cycles terminate, shared
//!   substructure stays shared in the copy
//! - jQuery-style deep/shallow extend with replace-on-mismatch semantics
//! - Explicit-worklist clone variant for untrusted or very deep inputs
//!
//! ## Quick Start
//!
//! ### Cloning a graph
//!
//! ```
//! use graphcopy::ds::operations::clone::clone_value;
//! use graphcopy::ds::operations::test_and_comparison::deep_equal;
//! use graphcopy::ds::record::RecordData;
//! use graphcopy::ds::value::{NumberType, Value};
//!
//! let shared = RecordData::ref_from_entries(vec![(
//!     "v".to_string(),
//!     Value::Number(NumberType::Integer(1)),
//! )]);
//! let root = RecordData::new_ref();
//! root.borrow_mut().set("p".to_string(), Value::Record(shared.clone()));
//! root.borrow_mut().set("q".to_string(), Value::Record(shared));
//! let original = Value::Record(root);
//!
//! let copy = clone_value(&original);
//! assert!(deep_equal(&original, &copy)); // field-for-field equal
//! assert!(original != copy);             // but a different node
//! ```
//!
//! ### Cloning a cyclic graph
//!
//! ```
//! use graphcopy::ds::operations::clone::clone_value;
//! use graphcopy::ds::record::RecordData;
//! use graphcopy::ds::value::Value;
//!
//! let a = RecordData::new_ref();
//! a.borrow_mut().set("me".to_string(), Value::Record(a.clone()));
//!
//! let copy = clone_value(&Value::Record(a));
//! // The copy's self-reference points at the copy, not at the original.
//! if let Value::Record(c) = &copy {
//!     let inner = c.borrow().get("me").cloned().unwrap();
//!     assert!(inner == copy);
//! }
//! ```
//!
//! ### Merging graphs
//!
//! ```
//! use graphcopy::ds::operations::merge::merge;
//! use graphcopy::ds::record::RecordData;
//! use graphcopy::ds::value::{NumberType, Value};
//!
//! let target = Value::Record(RecordData::ref_from_entries(vec![(
//!     "a".to_string(),
//!     Value::Number(NumberType::Integer(1)),
//! )]));
//! let source = Value::Record(RecordData::ref_from_entries(vec![
//!     ("a".to_string(), Value::Number(NumberType::Integer(2))),
//!     ("b".to_string(), Value::Number(NumberType::Integer(3))),
//! ]));
//!
//! let merged = merge(false, target, &[source]);
//! if let Value::Record(r) = &merged {
//!     let record = r.borrow();
//!     assert_eq!(record.get("a"), Some(&Value::Number(NumberType::Integer(2))));
//!     assert_eq!(record.get("b"), Some(&Value::Number(NumberType::Integer(3))));
//! }
//! ```
//!
//! ## Semantics
//!
//! Both engines classify every node they visit
//! ([`ds::operations::classify`]) and treat the categories differently:
//!
//! 1. **Leaves**: primitives and `Null`/`Undefined` are immutable and
//!    copied as-is; `Date` and `Pattern` leaves are duplicated; `Opaque`
//!    leaves (host handles, callables, domain objects) have no safe
//!    generic reconstruction and are passed through by reference.
//!
//! 2. **Containers**: `Sequence` and `Record` nodes are rebuilt by the
//!    clone engine and recursively combined by the merge engine. Records
//!    preserve insertion order for deterministic output.
//!
//! 3. **Merge tie-break**: when deep-merging, the existing target value is
//!    reused as the recursive target only when its category matches the
//!    incoming value's; on a mismatch the incoming side wins with a fresh
//!    container (replace, never coerce).
//!
//! Both operations are synchronous, single-threaded and I/O-free. The one
//! resource hazard is call-stack depth on pathologically nested inputs;
//! that is a documented limitation of the recursive engines, and
//! [`ds::operations::clone::clone_value_iterative`] exists for inputs
//! whose shape the caller does not control.
//!
//! ## Architecture
//!
//! - **[`ds`]** - Data structures (values, containers, leaves, memo)
//!   - **[`ds::operations`]** - The engines (classify, clone, merge,
//!     comparison)

#[macro_use]
extern crate lazy_static;

pub mod ds;

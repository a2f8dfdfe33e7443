use std::cell::RefCell;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::ds::date::DateData;
use crate::ds::foreign::ForeignObject;
use crate::ds::memo::Identity;
use crate::ds::pattern::PatternData;
use crate::ds::record::RecordData;
use crate::ds::sequence::SequenceData;

pub type SequenceType = Rc<RefCell<SequenceData>>;
pub type RecordType = Rc<RefCell<RecordData>>;
pub type OpaqueType = Rc<dyn ForeignObject>;

/// The universal unit being copied and merged. Every variant is decided at
/// construction time, so the engines dispatch with a static match instead
/// of a runtime type probe.
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(NumberType),
    String(String),
    Date(DateData),
    Pattern(PatternData),
    Sequence(SequenceType),
    Record(RecordType),
    Opaque(OpaqueType),
}

impl Value {
    pub fn new_sequence() -> Self {
        Value::Sequence(SequenceData::new_ref())
    }

    pub fn new_record() -> Self {
        Value::Record(RecordData::new_ref())
    }

    /// `Undefined` doubles as the absent sentinel; `Null` is a real value.
    pub fn is_undefined(&self) -> bool {
        match self {
            Value::Undefined => true,
            _ => false,
        }
    }

    /// Node identity for container and opaque values; leaves have none.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Value::Sequence(s) => Some(Identity::of_sequence(s)),
            Value::Record(r) => Some(Identity::of_record(r)),
            Value::Opaque(o) => Some(Identity::of_foreign(o)),
            _ => None,
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Undefined => Value::Undefined,
            Value::Null => Value::Null,
            Value::Boolean(d) => Value::Boolean(*d),
            Value::Number(d) => Value::Number(d.clone()),
            Value::String(d) => Value::String(d.to_string()),
            Value::Date(d) => Value::Date(d.clone()),
            Value::Pattern(d) => Value::Pattern(d.clone()),
            // Container and opaque clones share the node, not its contents.
            Value::Sequence(s) => Value::Sequence(s.clone()),
            Value::Record(r) => Value::Record(r.clone()),
            Value::Opaque(o) => Value::Opaque(o.clone()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Pattern(a), Value::Pattern(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => Rc::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b),
            (Value::Opaque(_), Value::Opaque(_)) => self.identity() == other.identity(),
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "bool({})", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Date(d) => write!(f, "{}", d),
            Value::Pattern(p) => write!(f, "{}", p),
            Value::Sequence(s) => write!(f, "sequence({})", s.borrow().len()),
            Value::Record(r) => write!(f, "record({})", r.borrow().len()),
            Value::Opaque(o) => write!(f, "[foreign {}]", o.class_name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Value::Undefined"),
            Value::Null => write!(f, "Value::Null"),
            Value::Boolean(b) => write!(f, "Value::Boolean({})", b),
            Value::Number(n) => write!(f, "Value::Number({:?})", n),
            Value::String(s) => write!(f, "Value::String({:?})", s),
            Value::Date(d) => write!(f, "Value::Date({})", d),
            Value::Pattern(p) => write!(f, "Value::Pattern({})", p),
            Value::Sequence(_) => write!(f, "Value::Sequence(...)"),
            Value::Record(_) => write!(f, "Value::Record(...)"),
            Value::Opaque(o) => write!(f, "Value::Opaque({})", o.class_name()),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NumberType {
    Integer(i64),
    Float(f64),
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer(i) => write!(f, "{}", i),
            NumberType::Float(nf) => write!(f, "{}", nf),
            NumberType::NaN => write!(f, "NaN"),
            NumberType::PositiveInfinity => write!(f, "+Infinity"),
            NumberType::NegativeInfinity => write!(f, "-Infinity"),
        }
    }
}

impl Clone for NumberType {
    fn clone(&self) -> Self {
        match self {
            NumberType::Integer(i) => NumberType::Integer(*i),
            NumberType::Float(nf) => NumberType::Float(*nf),
            NumberType::NaN => NumberType::NaN,
            NumberType::PositiveInfinity => NumberType::PositiveInfinity,
            NumberType::NegativeInfinity => NumberType::NegativeInfinity,
        }
    }
}

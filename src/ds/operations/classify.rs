use std::fmt;
use std::fmt::{Display, Formatter};

use crate::ds::value::Value;

pub const CATEGORY_STR_NULL: &str = "null";
pub const CATEGORY_STR_PRIMITIVE: &str = "primitive";
pub const CATEGORY_STR_DATE: &str = "date";
pub const CATEGORY_STR_PATTERN: &str = "pattern";
pub const CATEGORY_STR_SEQUENCE: &str = "sequence";
pub const CATEGORY_STR_RECORD: &str = "record";
pub const CATEGORY_STR_OPAQUE: &str = "opaque";

/// Structural category of a value. There is no failure path here: a shape
/// the engines cannot decompose is `Opaque` by construction, never an
/// error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Null,
    Primitive,
    DateLike,
    PatternLike,
    Sequence,
    Record,
    Opaque,
}

impl Category {
    /// Only these two categories are recursed into by the engines.
    pub fn is_container(&self) -> bool {
        match self {
            Category::Sequence | Category::Record => true,
            _ => false,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::Null => CATEGORY_STR_NULL,
                Category::Primitive => CATEGORY_STR_PRIMITIVE,
                Category::DateLike => CATEGORY_STR_DATE,
                Category::PatternLike => CATEGORY_STR_PATTERN,
                Category::Sequence => CATEGORY_STR_SEQUENCE,
                Category::Record => CATEGORY_STR_RECORD,
                Category::Opaque => CATEGORY_STR_OPAQUE,
            }
        )
    }
}

/// Deterministic, side-effect-free category dispatch. `Undefined` (the
/// absent sentinel) classifies together with `Null`.
pub fn classify(value: &Value) -> Category {
    match value {
        Value::Undefined | Value::Null => Category::Null,
        Value::Boolean(_) | Value::Number(_) | Value::String(_) => Category::Primitive,
        Value::Date(_) => Category::DateLike,
        Value::Pattern(_) => Category::PatternLike,
        Value::Sequence(_) => Category::Sequence,
        Value::Record(_) => Category::Record,
        Value::Opaque(_) => Category::Opaque,
    }
}

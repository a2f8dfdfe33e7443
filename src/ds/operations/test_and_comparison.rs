use std::collections::HashSet;
use std::rc::Rc;

use crate::ds::memo::Identity;
use crate::ds::value::{NumberType, Value};

fn same_number(a: &NumberType, b: &NumberType) -> bool {
    match a {
        NumberType::NaN => {
            if let NumberType::NaN = b {
                true
            } else {
                false
            }
        }
        NumberType::PositiveInfinity => {
            if let NumberType::PositiveInfinity = b {
                true
            } else {
                false
            }
        }
        NumberType::NegativeInfinity => {
            if let NumberType::NegativeInfinity = b {
                true
            } else {
                false
            }
        }
        _ => {
            let a_value = match a {
                NumberType::Float(f) => *f,
                NumberType::Integer(i) => *i as f64,
                _ => return false,
            };
            let b_value = match b {
                NumberType::Float(f) => *f,
                NumberType::Integer(i) => *i as f64,
                _ => return false,
            };
            a_value == b_value
        }
    }
}

/// Identity-level equality: primitives compare by value (`NaN` equals
/// itself, `Integer` and `Float` compare numerically), containers and
/// opaque leaves compare as the same node.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => same_number(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::Pattern(x), Value::Pattern(y)) => x == y,
        (Value::Sequence(x), Value::Sequence(y)) => Rc::ptr_eq(x, y),
        (Value::Record(x), Value::Record(y)) => Rc::ptr_eq(x, y),
        (Value::Opaque(_), Value::Opaque(_)) => a.identity() == b.identity(),
        _ => false,
    }
}

/// Structural equality, field for field. Safe on cyclic graphs: a pair of
/// nodes already under comparison higher up the walk is assumed equal, so
/// equivalent cycles compare equal instead of looping.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    let mut assumed: HashSet<(Identity, Identity)> = HashSet::new();
    deep_equal_inner(a, b, &mut assumed)
}

fn deep_equal_inner(a: &Value, b: &Value, assumed: &mut HashSet<(Identity, Identity)>) -> bool {
    match (a, b) {
        (Value::Sequence(x), Value::Sequence(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            let pair = (Identity::of_sequence(x), Identity::of_sequence(y));
            if !assumed.insert(pair) {
                return true;
            }
            let x_elements = x.borrow();
            let y_elements = y.borrow();
            if x_elements.len() != y_elements.len() {
                return false;
            }
            x_elements
                .iter()
                .zip(y_elements.iter())
                .all(|(xc, yc)| deep_equal_inner(xc, yc, assumed))
        }
        (Value::Record(x), Value::Record(y)) => {
            if Rc::ptr_eq(x, y) {
                return true;
            }
            let pair = (Identity::of_record(x), Identity::of_record(y));
            if !assumed.insert(pair) {
                return true;
            }
            let x_properties = x.borrow();
            let y_properties = y.borrow();
            if x_properties.len() != y_properties.len() {
                return false;
            }
            x_properties.iter().all(|(key, xc)| match y_properties.get(key) {
                Some(yc) => deep_equal_inner(xc, yc, assumed),
                None => false,
            })
        }
        _ => same_value(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::record::RecordData;
    use crate::ds::sequence::SequenceData;

    fn int(n: i64) -> Value {
        Value::Number(NumberType::Integer(n))
    }

    #[test]
    fn test_same_value_numbers() {
        assert!(same_value(
            &Value::Number(NumberType::NaN),
            &Value::Number(NumberType::NaN)
        ));
        assert!(same_value(
            &Value::Number(NumberType::Integer(2)),
            &Value::Number(NumberType::Float(2.0))
        ));
        assert!(!same_value(
            &Value::Number(NumberType::Integer(2)),
            &Value::Number(NumberType::Float(2.5))
        ));
    }

    #[test]
    fn test_same_value_containers_by_node() {
        let a = RecordData::new_ref();
        let alias = Value::Record(a.clone());
        assert!(same_value(&Value::Record(a), &alias));
        assert!(!same_value(
            &Value::Record(RecordData::new_ref()),
            &Value::Record(RecordData::new_ref())
        ));
    }

    #[test]
    fn test_deep_equal_structural() {
        let a = Value::Sequence(SequenceData::ref_from_elements(vec![int(1), int(2)]));
        let b = Value::Sequence(SequenceData::ref_from_elements(vec![int(1), int(2)]));
        let c = Value::Sequence(SequenceData::ref_from_elements(vec![int(1), int(3)]));
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &c));
    }

    #[test]
    fn test_deep_equal_on_equivalent_cycles() {
        let a = RecordData::new_ref();
        a.borrow_mut()
            .set("self".to_string(), Value::Record(a.clone()));
        let b = RecordData::new_ref();
        b.borrow_mut()
            .set("self".to_string(), Value::Record(b.clone()));
        assert!(deep_equal(&Value::Record(a), &Value::Record(b)));
    }
}

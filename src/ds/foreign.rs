//! Opaque (foreign) values.
//!
//! Anything the engine cannot safely decompose and rebuild — host handles,
//! callables, domain objects with their own invariants — is wrapped by the
//! caller as a `ForeignObject` at construction time. The engines pass such
//! values through by reference and never recurse into them.

use std::any::Any;
use std::rc::Rc;

use uuid::Uuid;

use crate::ds::value::OpaqueType;

pub trait ForeignObject {
    /// Host-side class name, used for display only.
    fn class_name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
}

/// A ready-made foreign value: an inert, uniquely tagged handle. Useful as
/// a stand-in for host resources in tests and demos.
pub struct NativeHandle {
    tag: String,
}

impl NativeHandle {
    pub fn new(tag: String) -> Self {
        NativeHandle { tag }
    }

    pub fn new_empty() -> Self {
        NativeHandle {
            tag: Uuid::new_v4().to_hyphenated().to_string(),
        }
    }

    pub fn new_ref(tag: String) -> OpaqueType {
        Rc::new(NativeHandle::new(tag))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl ForeignObject for NativeHandle {
    fn class_name(&self) -> &str {
        "NativeHandle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

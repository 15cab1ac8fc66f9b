//! `serde_json` documents as comparable values.
//!
//! Objects are composites whose members are their keys, arrays are
//! sequences and numbers keep the width `serde_json` parsed them with
//! (`i64`, `u64` or `f64`), so `1` and `1.0` compare equal through the
//! numeric upcast.

use super::{
    missing_member, Composite, Handle, MemberDescriptor, Reflect, Reflected, Scalar, Simple,
    TypeDescriptor, TypeKind, Typed,
};
use crate::errors::Result;
use serde_json::{Map, Number, Value};
use std::sync::Arc;

impl Typed for Value {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Value>(TypeKind::Dynamic)
    }
}

fn number_simple(number: &Number) -> Simple<'static> {
    if let Some(v) = number.as_i64() {
        Simple::of::<i64>(Scalar::Integer(i128::from(v)))
    } else if let Some(v) = number.as_u64() {
        Simple::of::<u64>(Scalar::Integer(i128::from(v)))
    } else {
        Simple::of::<f64>(Scalar::Real(number.as_f64().unwrap_or(f64::NAN)))
    }
}

impl Reflect for Value {
    fn reflect(&self) -> Reflected<'_> {
        match self {
            Value::Null => Reflected::Null,
            Value::Bool(v) => Reflected::Simple(Simple::of::<bool>(Scalar::Bool(*v))),
            Value::Number(number) => Reflected::Simple(number_simple(number)),
            Value::String(text) => Reflected::Simple(Simple::of::<String>(Scalar::Text(text))),
            Value::Array(items) => Reflected::Sequence(items),
            Value::Object(map) => Reflected::Composite(map),
        }
    }
}

impl Typed for Map<String, Value> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Map<String, Value>>(TypeKind::Composite)
    }
}

impl Reflect for Map<String, Value> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Composite(self)
    }
}

impl Composite for Map<String, Value> {
    fn type_descriptor(&self) -> TypeDescriptor {
        <Self as Typed>::type_descriptor()
    }

    // Keys differ per document, so the member list is not cached.
    fn members(&self) -> Arc<[MemberDescriptor]> {
        self.keys()
            .map(|key| MemberDescriptor::dynamic(key.clone(), Value::type_descriptor()).read_only())
            .collect()
    }

    fn read(&self, member: &MemberDescriptor) -> Result<Handle<'_>> {
        match self.get(member.name()) {
            Some(value) => Ok(Handle::Borrowed(value)),
            None => Err(missing_member(self, member)),
        }
    }
}

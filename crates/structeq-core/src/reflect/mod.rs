//! Runtime inspection model used by the comparer and the printer.
//!
//! Rust has no runtime reflection, so every comparable type describes itself:
//!
//! - [`Typed`] gives the *declared* (static) type of a member: its identity,
//!   name and [`TypeKind`]. This is how the comparer answers "is this a
//!   simple type" without scanning an allow-list.
//! - [`Reflect`] gives the *runtime* view of a value as a [`Reflected`]:
//!   null, a simple scalar, an ordered [`Sequence`], a [`Composite`] with
//!   named members, or an indirection that has to be looked through
//!   (`RefCell`, `Weak`).
//!
//! Plain structs register their members with [`reflect_struct!`](crate::reflect_struct),
//! field-less enums with [`reflect_enum!`](crate::reflect_enum). Anything else can
//! implement [`Composite`] by hand, which is how computed members and
//! dynamic shapes such as JSON objects are supported.

pub mod json;
pub mod macros;
pub mod member;
pub mod pointers;
pub mod sequence;
pub mod shape;
pub mod simple;

pub use member::{missing_member, Composite, MemberDescriptor, MemberKind};
pub use sequence::{KeyValue, Sequence};
pub use simple::{Numeric, Scalar, Simple};

use crate::errors::StructEqError;
use std::any::TypeId;
use std::cell::Ref;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

/// Static classification of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Numbers, strings, dates, booleans, enums and their nullable wrappers
    Simple,
    /// Ordered collections with a single element type
    Sequence,
    /// Types with named members
    Composite,
    /// Decided per value (e.g. a JSON value can be any of the above)
    Dynamic,
}

/// Identity and classification of a type.
///
/// Two descriptors are equal when they describe the same `TypeId`; the name
/// is only used for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
    nullable: bool,
}

impl TypeDescriptor {
    /// Describe `T` with the given kind
    pub fn of<T: ?Sized + 'static>(kind: TypeKind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            kind,
            nullable: false,
        }
    }

    /// Describe a nullable wrapper `W` around a type described by `inner`.
    ///
    /// The wrapper keeps the inner kind but is a distinct type, so an
    /// `Option<i32>` member does not match an `i32` member.
    pub fn nullable_of<W: ?Sized + 'static>(inner: TypeDescriptor) -> Self {
        Self {
            id: TypeId::of::<W>(),
            name: std::any::type_name::<W>(),
            kind: inner.kind,
            nullable: true,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name with module paths stripped, e.g. `Vec<String>`
    pub fn short_name(&self) -> String {
        shorten_type_name(self.name)
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_simple(&self) -> bool {
        self.kind == TypeKind::Simple
    }

    pub fn is_sequence(&self) -> bool {
        self.kind == TypeKind::Sequence
    }

    pub fn is_composite(&self) -> bool {
        self.kind == TypeKind::Composite
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.short_name())
    }
}

fn shorten_type_name(name: &str) -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let mut out = String::with_capacity(name.len());
    let mut path = String::new();
    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            out.push_str(last_segment(&path));
            path.clear();
            out.push(ch);
        }
    }
    out.push_str(last_segment(&path));
    out
}

/// Declared (static) type information
pub trait Typed: 'static {
    fn type_descriptor() -> TypeDescriptor;
}

/// Runtime view of a value
pub trait Reflect {
    fn reflect(&self) -> Reflected<'_>;
}

/// What a value looks like at runtime
pub enum Reflected<'a> {
    Null,
    Simple(Simple<'a>),
    Sequence(&'a dyn Sequence),
    Composite(&'a dyn Composite),
    /// The value lives behind a guard or an upgraded pointer; inspect the handle instead
    Indirect(Handle<'a>),
    /// The value exists but cannot be inspected right now
    Inaccessible(StructEqError),
}

impl Reflected<'_> {
    /// Short label used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            Reflected::Null => "null",
            Reflected::Simple(_) => "simple",
            Reflected::Sequence(_) => "collection",
            Reflected::Composite(_) => "composite",
            Reflected::Indirect(_) => "indirect",
            Reflected::Inaccessible(_) => "inaccessible",
        }
    }
}

/// A value handed out by a member getter or a sequence.
///
/// Most members are borrowed straight from their host; computed members
/// return an owned value, upgraded `Weak` pointers a shared one, and
/// `RefCell` contents stay behind their borrow guard for as long as the
/// handle lives.
pub enum Handle<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Box<dyn Reflect + 'a>),
    Shared(Rc<dyn Reflect + 'a>),
    Guarded(Ref<'a, dyn Reflect + 'a>),
}

impl<'a> Handle<'a> {
    /// Wrap a computed value
    pub fn owned<T: Reflect + 'a>(value: T) -> Self {
        Handle::Owned(Box::new(value))
    }
}

impl<'a> Deref for Handle<'a> {
    type Target = dyn Reflect + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            Handle::Borrowed(value) => *value,
            Handle::Owned(value) => value.as_ref(),
            Handle::Shared(value) => value.as_ref(),
            Handle::Guarded(value) => &**value,
        }
    }
}

/// Runtime classification after looking through indirections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Simple,
    Sequence,
    Composite,
    Inaccessible,
}

/// Classify a value, following `Indirect` handles
pub fn value_kind(value: &dyn Reflect) -> ValueKind {
    match value.reflect() {
        Reflected::Null => ValueKind::Null,
        Reflected::Simple(_) => ValueKind::Simple,
        Reflected::Sequence(_) => ValueKind::Sequence,
        Reflected::Composite(_) => ValueKind::Composite,
        Reflected::Indirect(handle) => value_kind(&*handle),
        Reflected::Inaccessible(_) => ValueKind::Inaccessible,
    }
}

/// Short runtime type name of a value, `null` for null
pub fn runtime_type_name(value: &dyn Reflect) -> String {
    match value.reflect() {
        Reflected::Null => "null".to_string(),
        Reflected::Simple(simple) => simple.type_descriptor().short_name(),
        Reflected::Sequence(sequence) => sequence.type_descriptor().short_name(),
        Reflected::Composite(composite) => composite.type_descriptor().short_name(),
        Reflected::Indirect(handle) => runtime_type_name(&*handle),
        Reflected::Inaccessible(_) => "<inaccessible>".to_string(),
    }
}

/// Address of the value behind a (possibly fat) reference
pub(crate) fn address<T: ?Sized>(value: &T) -> usize {
    (value as *const T).cast::<()>() as usize
}

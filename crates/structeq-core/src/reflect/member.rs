//! Member descriptors and the composite trait.

use super::{Handle, TypeDescriptor, Typed};
use crate::errors::{Result, StructEqError};
use std::borrow::Cow;
use std::sync::Arc;

/// Whether a member is a primary (property) or secondary (field) member.
///
/// Fields only take part in a comparison when the configuration includes
/// them; properties always do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Property,
    Field,
}

/// Uniform accessor over a named member of a composite type
#[derive(Debug, Clone)]
pub struct MemberDescriptor {
    name: Cow<'static, str>,
    kind: MemberKind,
    declared_type: TypeDescriptor,
    readable: bool,
    writable: bool,
}

impl MemberDescriptor {
    /// A readable and writable property declared as `V`
    pub fn property<V: Typed + ?Sized>(name: &'static str) -> Self {
        Self::new(Cow::Borrowed(name), MemberKind::Property, V::type_descriptor())
    }

    /// A readable and writable field declared as `V`
    pub fn field<V: Typed + ?Sized>(name: &'static str) -> Self {
        Self::new(Cow::Borrowed(name), MemberKind::Field, V::type_descriptor())
    }

    /// A property whose name is only known at runtime (e.g. a JSON key)
    pub fn dynamic(name: impl Into<Cow<'static, str>>, declared_type: TypeDescriptor) -> Self {
        Self::new(name.into(), MemberKind::Property, declared_type)
    }

    fn new(name: Cow<'static, str>, kind: MemberKind, declared_type: TypeDescriptor) -> Self {
        Self {
            name,
            kind,
            declared_type,
            readable: true,
            writable: true,
        }
    }

    /// Mark the member as having no setter
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Mark the member as having no getter; it is never compared
    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn declared_type(&self) -> TypeDescriptor {
        self.declared_type
    }

    pub fn is_readable(&self) -> bool {
        self.readable
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Read this member's value from `host`
    ///
    /// # Errors
    ///
    /// - `MemberNotReadable` if the member is write-only
    /// - whatever the host's getter reports (e.g. `MemberNotFound`, `BorrowConflict`)
    pub fn read<'h>(&self, host: &'h dyn Composite) -> Result<Handle<'h>> {
        if !self.readable {
            return Err(StructEqError::MemberNotReadable {
                type_name: host.type_descriptor().short_name(),
                member: self.name.to_string(),
            });
        }
        host.read(self)
    }
}

impl std::fmt::Display for MemberDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.declared_type)
    }
}

/// A value with named members
pub trait Composite {
    /// Runtime type of the value
    fn type_descriptor(&self) -> TypeDescriptor;

    /// All members of the value, in declaration order
    fn members(&self) -> Arc<[MemberDescriptor]>;

    /// Getter for one of the descriptors returned by [`Composite::members`]
    fn read(&self, member: &MemberDescriptor) -> Result<Handle<'_>>;
}

/// Error for a descriptor that `host` does not know
pub fn missing_member(host: &dyn Composite, member: &MemberDescriptor) -> StructEqError {
    StructEqError::MemberNotFound {
        type_name: host.type_descriptor().short_name(),
        member: member.name().to_string(),
    }
}

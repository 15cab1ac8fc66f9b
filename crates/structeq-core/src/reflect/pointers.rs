//! Wrappers that are looked through when comparing.
//!
//! References, boxes and shared pointers are transparent: they neither
//! change the declared type nor the runtime view. `Option`, `OnceCell` and
//! `Weak` are nullable wrappers. `RefCell` contents are inspected behind a
//! shared borrow held for as long as the comparison needs them.

use super::{Handle, Reflect, Reflected, TypeDescriptor, Typed};
use crate::errors::StructEqError;
use std::cell::{OnceCell, Ref, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Arc;

macro_rules! transparent {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Typed + ?Sized> Typed for $wrapper<T> {
                fn type_descriptor() -> TypeDescriptor {
                    T::type_descriptor()
                }
            }

            impl<T: Reflect + ?Sized> Reflect for $wrapper<T> {
                fn reflect(&self) -> Reflected<'_> {
                    (**self).reflect()
                }
            }
        )*
    };
}

transparent!(Box, Rc, Arc);

impl<T: Typed + ?Sized> Typed for &'static T {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Reflected<'_> {
        (**self).reflect()
    }
}

impl<T: Typed> Typed for Option<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::nullable_of::<Option<T>>(T::type_descriptor())
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Reflected<'_> {
        match self {
            Some(value) => value.reflect(),
            None => Reflected::Null,
        }
    }
}

impl<T: Typed> Typed for OnceCell<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::nullable_of::<OnceCell<T>>(T::type_descriptor())
    }
}

impl<T: Reflect> Reflect for OnceCell<T> {
    fn reflect(&self) -> Reflected<'_> {
        match self.get() {
            Some(value) => value.reflect(),
            None => Reflected::Null,
        }
    }
}

impl<T: Typed> Typed for Weak<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::nullable_of::<Weak<T>>(T::type_descriptor())
    }
}

impl<T: Reflect + 'static> Reflect for Weak<T> {
    fn reflect(&self) -> Reflected<'_> {
        match self.upgrade() {
            Some(strong) => Reflected::Indirect(Handle::Shared(strong)),
            None => Reflected::Null,
        }
    }
}

impl<T: Typed> Typed for RefCell<T> {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }
}

fn as_reflect<'r, T: Reflect + 'r>(value: &T) -> &(dyn Reflect + 'r) {
    value
}

impl<T: Reflect + 'static> Reflect for RefCell<T> {
    fn reflect(&self) -> Reflected<'_> {
        match self.try_borrow() {
            Ok(guard) => Reflected::Indirect(Handle::Guarded(Ref::map(guard, as_reflect::<T>))),
            Err(_) => Reflected::Inaccessible(StructEqError::BorrowConflict {
                type_name: super::shorten_type_name(std::any::type_name::<T>()),
            }),
        }
    }
}

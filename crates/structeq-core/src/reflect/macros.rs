//! Registration macros for user types.

/// Describe a struct's comparable members.
///
/// Properties always take part in a comparison, fields only when the
/// configuration includes fields. Each member is declared with its type,
/// which must match the struct definition.
///
/// ```
/// use structeq_core::{deep_equal, reflect_struct};
///
/// struct Person {
///     name: String,
///     tags: Vec<String>,
///     visits: u32,
/// }
///
/// reflect_struct!(Person {
///     properties { name: String, tags: Vec<String> }
///     fields { visits: u32 }
/// });
///
/// let a = Person { name: "a".into(), tags: vec!["x".into(), "y".into()], visits: 1 };
/// let b = Person { name: "a".into(), tags: vec!["y".into(), "x".into()], visits: 2 };
/// assert!(deep_equal(&a, &b).unwrap());
/// ```
#[macro_export]
macro_rules! reflect_struct {
    (
        $ty:ident {
            $(properties { $($prop:ident : $prop_ty:ty),* $(,)? })?
            $(fields { $($field:ident : $field_ty:ty),* $(,)? })?
        }
    ) => {
        impl $crate::reflect::Typed for $ty {
            fn type_descriptor() -> $crate::reflect::TypeDescriptor {
                $crate::reflect::TypeDescriptor::of::<$ty>($crate::reflect::TypeKind::Composite)
            }
        }

        impl $crate::reflect::Reflect for $ty {
            fn reflect(&self) -> $crate::reflect::Reflected<'_> {
                $crate::reflect::Reflected::Composite(self)
            }
        }

        impl $crate::reflect::Composite for $ty {
            fn type_descriptor(&self) -> $crate::reflect::TypeDescriptor {
                <$ty as $crate::reflect::Typed>::type_descriptor()
            }

            fn members(&self) -> ::std::sync::Arc<[$crate::reflect::MemberDescriptor]> {
                $crate::reflect::shape::cached_members::<$ty>(|| {
                    ::std::vec![
                        $($($crate::reflect::MemberDescriptor::property::<$prop_ty>(stringify!($prop)),)*)?
                        $($($crate::reflect::MemberDescriptor::field::<$field_ty>(stringify!($field)),)*)?
                    ]
                })
            }

            fn read(
                &self,
                member: &$crate::reflect::MemberDescriptor,
            ) -> $crate::errors::Result<$crate::reflect::Handle<'_>> {
                match member.name() {
                    $($(stringify!($prop) => {
                        let value: &$prop_ty = &self.$prop;
                        Ok($crate::reflect::Handle::Borrowed(value))
                    })*)?
                    $($(stringify!($field) => {
                        let value: &$field_ty = &self.$field;
                        Ok($crate::reflect::Handle::Borrowed(value))
                    })*)?
                    _ => Err($crate::reflect::missing_member(self, member)),
                }
            }
        }
    };
}

/// Make field-less enums simple values.
///
/// Variants compare by discriminant and print as `Type::Variant`. The enum
/// must be `Copy` and `Debug`.
///
/// ```
/// use structeq_core::{deep_equal, reflect_enum};
///
/// #[derive(Debug, Clone, Copy)]
/// enum Colour { Red, Green }
///
/// reflect_enum!(Colour);
///
/// assert!(deep_equal(&Colour::Red, &Colour::Red).unwrap());
/// assert!(!deep_equal(&Colour::Red, &Colour::Green).unwrap());
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::reflect::Typed for $ty {
                fn type_descriptor() -> $crate::reflect::TypeDescriptor {
                    $crate::reflect::TypeDescriptor::of::<$ty>($crate::reflect::TypeKind::Simple)
                }
            }

            impl $crate::reflect::Reflect for $ty {
                fn reflect(&self) -> $crate::reflect::Reflected<'_> {
                    $crate::reflect::Reflected::Simple($crate::reflect::Simple::of::<$ty>(
                        $crate::reflect::Scalar::Enum {
                            variant: ::std::borrow::Cow::Owned(format!("{:?}", self)),
                            discriminant: *self as i64,
                        },
                    ))
                }
            }
        )+
    };
}

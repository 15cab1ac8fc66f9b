//! Simple (scalar) values and their built-in implementations.

use super::{Reflect, Reflected, TypeDescriptor, TypeKind, Typed};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::borrow::Cow;
use uuid::Uuid;

/// Payload of a simple value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Char(char),
    Integer(i128),
    Unsigned(u128),
    Real(f64),
    Text(&'a str),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Uuid(Uuid),
    /// A field-less enum variant
    Enum {
        variant: Cow<'a, str>,
        discriminant: i64,
    },
}

impl Scalar<'_> {
    /// Native value equality for two scalars of the same runtime type.
    ///
    /// NaN equals NaN so that every value stays equal to itself.
    pub fn same_value(&self, other: &Scalar<'_>) -> bool {
        match (self, other) {
            (Scalar::Real(a), Scalar::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::Enum { discriminant: a, .. }, Scalar::Enum { discriminant: b, .. }) => a == b,
            (a, b) => a == b,
        }
    }

    /// Upcast to the common numeric representation, if this scalar is numeric
    pub fn to_numeric(&self) -> Option<Numeric> {
        match self {
            Scalar::Integer(v) => Some(Numeric::Integer(*v)),
            Scalar::Unsigned(v) => Some(Numeric::Unsigned(*v)),
            Scalar::Real(v) if v.is_finite() => Some(Numeric::Real(*v)),
            Scalar::Enum { discriminant, .. } => Some(Numeric::Integer(i128::from(*discriminant))),
            _ => None,
        }
    }
}

/// Exact numeric representation shared by all numeric scalars.
///
/// Values of different widths and signedness compare by mathematical value:
/// a real equals an integer only when it is integral and exactly representable.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    Integer(i128),
    Unsigned(u128),
    Real(f64),
}

fn real_as_integer(r: f64) -> Option<i128> {
    // i128::MAX as f64 rounds up to 2^127, hence the strict upper bound
    (r.fract() == 0.0 && r >= i128::MIN as f64 && r < i128::MAX as f64).then(|| r as i128)
}

fn real_as_unsigned(r: f64) -> Option<u128> {
    (r.fract() == 0.0 && r >= 0.0 && r < u128::MAX as f64).then(|| r as u128)
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Numeric::Integer(a), Numeric::Integer(b)) => a == b,
            (Numeric::Unsigned(a), Numeric::Unsigned(b)) => a == b,
            (Numeric::Real(a), Numeric::Real(b)) => a == b,
            (Numeric::Integer(i), Numeric::Unsigned(u))
            | (Numeric::Unsigned(u), Numeric::Integer(i)) => {
                u128::try_from(i).map_or(false, |i| i == u)
            }
            (Numeric::Real(r), Numeric::Integer(i)) | (Numeric::Integer(i), Numeric::Real(r)) => {
                real_as_integer(r) == Some(i)
            }
            (Numeric::Real(r), Numeric::Unsigned(u)) | (Numeric::Unsigned(u), Numeric::Real(r)) => {
                real_as_unsigned(r) == Some(u)
            }
        }
    }
}

/// A simple value together with its runtime type
#[derive(Debug, Clone)]
pub struct Simple<'a> {
    ty: TypeDescriptor,
    scalar: Scalar<'a>,
}

impl<'a> Simple<'a> {
    pub fn new(ty: TypeDescriptor, scalar: Scalar<'a>) -> Self {
        Self { ty, scalar }
    }

    /// A simple value whose runtime type is `T`
    pub fn of<T: Typed + ?Sized>(scalar: Scalar<'a>) -> Self {
        Self::new(T::type_descriptor(), scalar)
    }

    pub fn type_descriptor(&self) -> TypeDescriptor {
        self.ty
    }

    pub fn scalar(&self) -> &Scalar<'a> {
        &self.scalar
    }

    pub fn to_numeric(&self) -> Option<Numeric> {
        self.scalar.to_numeric()
    }
}

impl std::fmt::Display for Simple<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.scalar {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Char(v) => write!(f, "{:?}", v),
            Scalar::Integer(v) => write!(f, "{}", v),
            Scalar::Unsigned(v) => write!(f, "{}", v),
            Scalar::Real(v) => write!(f, "{}", v),
            Scalar::Text(v) => write!(f, "{:?}", v),
            Scalar::Date(v) => write!(f, "{}", v),
            Scalar::DateTime(v) => write!(f, "{}", v),
            Scalar::Uuid(v) => write!(f, "{}", v),
            Scalar::Enum { variant, .. } => write!(f, "{}::{}", self.ty.short_name(), variant),
        }
    }
}

/// Widen an `f32` through its shortest decimal rendering, so `0.1f32`
/// becomes `0.1f64` rather than `0.10000000149011612`.
fn widen_f32(v: f32) -> f64 {
    if v.is_finite() {
        v.to_string().parse().unwrap_or(f64::from(v))
    } else {
        f64::from(v)
    }
}

macro_rules! simple_type {
    ($ty:ty, |$v:ident| $scalar:expr) => {
        impl Typed for $ty {
            fn type_descriptor() -> TypeDescriptor {
                TypeDescriptor::of::<$ty>(TypeKind::Simple)
            }
        }

        impl Reflect for $ty {
            fn reflect(&self) -> Reflected<'_> {
                let $v = self;
                Reflected::Simple(Simple::of::<$ty>($scalar))
            }
        }
    };
}

macro_rules! integer_types {
    ($($ty:ty),*) => {
        $(simple_type!($ty, |v| Scalar::Integer(i128::from(*v)));)*
    };
}

integer_types!(i8, i16, i32, i64, i128, u8, u16, u32, u64);
simple_type!(isize, |v| Scalar::Integer(*v as i128));
simple_type!(usize, |v| Scalar::Integer(*v as i128));
simple_type!(u128, |v| Scalar::Unsigned(*v));
simple_type!(f32, |v| Scalar::Real(widen_f32(*v)));
simple_type!(f64, |v| Scalar::Real(*v));
simple_type!(bool, |v| Scalar::Bool(*v));
simple_type!(char, |v| Scalar::Char(*v));
simple_type!(NaiveDate, |v| Scalar::Date(*v));
simple_type!(NaiveDateTime, |v| Scalar::DateTime(*v));
simple_type!(DateTime<Utc>, |v| Scalar::DateTime(v.naive_utc()));
simple_type!(Uuid, |v| Scalar::Uuid(*v));
simple_type!(String, |v| Scalar::Text(v.as_str()));

// Every string flavour is described as `String` so they compare as one type.

impl Typed for str {
    fn type_descriptor() -> TypeDescriptor {
        String::type_descriptor()
    }
}

impl Reflect for str {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Simple(Simple::of::<String>(Scalar::Text(self)))
    }
}

impl Typed for Cow<'static, str> {
    fn type_descriptor() -> TypeDescriptor {
        String::type_descriptor()
    }
}

impl Reflect for Cow<'_, str> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Simple(Simple::of::<String>(Scalar::Text(self.as_ref())))
    }
}

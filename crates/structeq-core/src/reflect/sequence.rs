//! Ordered collections.
//!
//! Maps are sequences of key/value entries, each entry a composite with a
//! `key` and a `value` member. Only collections with a deterministic
//! iteration order are provided.

use super::{
    missing_member, shape, Composite, Handle, MemberDescriptor, Reflect, Reflected, TypeDescriptor,
    TypeKind, Typed,
};
use crate::errors::Result;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::marker::PhantomData;
use std::sync::Arc;

/// A collection with a single element type
pub trait Sequence {
    /// Runtime type of the collection
    fn type_descriptor(&self) -> TypeDescriptor;

    /// Declared element type
    fn element_type(&self) -> TypeDescriptor;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements in iteration order
    fn elements(&self) -> Box<dyn Iterator<Item = Handle<'_>> + '_>;
}

macro_rules! sequence_type {
    ($($coll:ident),*) => {
        $(
            impl<T: Reflect + Typed> Typed for $coll<T> {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::of::<$coll<T>>(TypeKind::Sequence)
                }
            }

            impl<T: Reflect + Typed> Reflect for $coll<T> {
                fn reflect(&self) -> Reflected<'_> {
                    Reflected::Sequence(self)
                }
            }

            impl<T: Reflect + Typed> Sequence for $coll<T> {
                fn type_descriptor(&self) -> TypeDescriptor {
                    <Self as Typed>::type_descriptor()
                }

                fn element_type(&self) -> TypeDescriptor {
                    T::type_descriptor()
                }

                fn len(&self) -> usize {
                    $coll::len(self)
                }

                fn elements(&self) -> Box<dyn Iterator<Item = Handle<'_>> + '_> {
                    Box::new(self.iter().map(|item| Handle::Borrowed(item)))
                }
            }
        )*
    };
}

sequence_type!(Vec, VecDeque, BTreeSet);

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<[T; N]>(TypeKind::Sequence)
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Sequence(self)
    }
}

impl<T: Reflect + Typed, const N: usize> Sequence for [T; N] {
    fn type_descriptor(&self) -> TypeDescriptor {
        <Self as Typed>::type_descriptor()
    }

    fn element_type(&self) -> TypeDescriptor {
        T::type_descriptor()
    }

    fn len(&self) -> usize {
        N
    }

    fn elements(&self) -> Box<dyn Iterator<Item = Handle<'_>> + '_> {
        Box::new(self.iter().map(|item| Handle::Borrowed(item)))
    }
}

/// Type of the entries of a map with keys `K` and values `V`
pub struct KeyValue<K, V>(PhantomData<(K, V)>);

impl<K: Typed, V: Typed> Typed for KeyValue<K, V> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<KeyValue<K, V>>(TypeKind::Composite)
    }
}

struct MapEntry<'a, K, V> {
    key: &'a K,
    value: &'a V,
}

impl<K: Reflect + Typed, V: Reflect + Typed> Reflect for MapEntry<'_, K, V> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Composite(self)
    }
}

impl<K: Reflect + Typed, V: Reflect + Typed> Composite for MapEntry<'_, K, V> {
    fn type_descriptor(&self) -> TypeDescriptor {
        KeyValue::<K, V>::type_descriptor()
    }

    fn members(&self) -> Arc<[MemberDescriptor]> {
        shape::cached_members::<KeyValue<K, V>>(|| {
            vec![
                MemberDescriptor::property::<K>("key").read_only(),
                MemberDescriptor::property::<V>("value").read_only(),
            ]
        })
    }

    fn read(&self, member: &MemberDescriptor) -> Result<Handle<'_>> {
        match member.name() {
            "key" => Ok(Handle::Borrowed(self.key)),
            "value" => Ok(Handle::Borrowed(self.value)),
            _ => Err(missing_member(self, member)),
        }
    }
}

impl<K: Reflect + Typed, V: Reflect + Typed> Typed for BTreeMap<K, V> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<BTreeMap<K, V>>(TypeKind::Sequence)
    }
}

impl<K: Reflect + Typed, V: Reflect + Typed> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Sequence(self)
    }
}

impl<K: Reflect + Typed, V: Reflect + Typed> Sequence for BTreeMap<K, V> {
    fn type_descriptor(&self) -> TypeDescriptor {
        <Self as Typed>::type_descriptor()
    }

    fn element_type(&self) -> TypeDescriptor {
        KeyValue::<K, V>::type_descriptor()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = Handle<'_>> + '_> {
        Box::new(
            self.iter()
                .map(|(key, value)| Handle::owned(MapEntry { key, value })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::stringify;

    fn sequence(value: &dyn Reflect) -> &dyn Sequence {
        match value.reflect() {
            Reflected::Sequence(sequence) => sequence,
            other => panic!("expected a collection, got {}", other.label()),
        }
    }

    #[test]
    fn test_vec_reports_element_type() {
        let items = vec![1u8, 2, 3];
        let seq = sequence(&items);

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.element_type(), u8::type_descriptor());
        assert_eq!(seq.type_descriptor().short_name(), "Vec<u8>");
    }

    #[test]
    fn test_arrays_are_sequences() {
        let array = [1i32, 2];
        assert_eq!(sequence(&array).len(), 2);
        assert!(<[i32; 2] as Typed>::type_descriptor().is_sequence());
    }

    #[test]
    fn test_map_entries_are_composites() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 1u8);
        map.insert("b".to_string(), 2u8);

        let rendered = stringify(&map);
        assert!(rendered.contains("key: \"a\""));
        assert!(rendered.contains("value: 2"));
        assert_eq!(sequence(&map).element_type().short_name(), "KeyValue<String, u8>");
    }
}

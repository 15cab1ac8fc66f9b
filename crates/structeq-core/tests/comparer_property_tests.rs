#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use std::rc::Rc;
use structeq_core::reflect::{Handle, Reflected, TypeKind};
use structeq_core::{
    deep_equal, reflect_struct, shape_equal, stringify, sub_equal, Reflect, Sequence,
    StructuralComparer, TypeDescriptor, Typed,
};

/// A collection whose first element is the collection itself
struct Looped {
    label: u8,
}

impl Typed for Looped {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Looped>(TypeKind::Sequence)
    }
}

impl Reflect for Looped {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Sequence(self)
    }
}

impl Sequence for Looped {
    fn type_descriptor(&self) -> TypeDescriptor {
        <Self as Typed>::type_descriptor()
    }

    fn element_type(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Looped>(TypeKind::Dynamic)
    }

    fn len(&self) -> usize {
        2
    }

    fn elements(&self) -> Box<dyn Iterator<Item = Handle<'_>> + '_> {
        Box::new([Handle::Borrowed(self), Handle::owned(self.label)].into_iter())
    }
}

struct Holder {
    items: Looped,
}

reflect_struct!(Holder { properties { items: Looped } });

#[test]
fn test_reflexivity_on_plain_values() {
    let record = tagged("a", &["x", "y"]);

    assert!(deep_equal(&record, &record).unwrap());
    assert!(deep_equal(&42i32, &42i32).unwrap());
    assert!(deep_equal(&vec![1.5f64, f64::NAN], &vec![1.5f64, f64::NAN]).unwrap());
    assert!(deep_equal(&"text", &"text").unwrap());
}

#[test]
fn test_reflexivity_on_self_referential_graphs() {
    let node = self_loop(1);
    let link = weak_loop(2);
    let chain = refcell_loop(3);
    let ring = ring(4, 5);

    assert!(deep_equal(&node, &node).unwrap());
    assert!(deep_equal(&link, &link).unwrap());
    assert!(deep_equal(&chain, &chain).unwrap());
    assert!(deep_equal(&ring, &ring).unwrap());
}

#[test]
fn test_null_handling() {
    let none: Option<Tagged> = None;
    let some = Some(tagged("a", &[]));

    assert!(deep_equal(&none, &None::<Tagged>).unwrap());
    assert!(!deep_equal(&none, &some).unwrap());
    assert!(!deep_equal(&some, &none).unwrap());
}

#[test]
fn test_numeric_upcast_equivalence() {
    assert!(deep_equal(&2i32, &2i64).unwrap());
    assert!(!deep_equal(&2i32, &3i64).unwrap());
    assert!(deep_equal(&2u8, &2.0f64).unwrap());
    assert!(!deep_equal(&2u8, &2.5f64).unwrap());
}

#[test]
fn test_non_numeric_simple_types_do_not_upcast() {
    assert!(!deep_equal(&"2", &2i32).unwrap());
    assert!(!deep_equal(&true, &1u8).unwrap());
}

#[test]
fn test_cycle_termination() {
    assert!(deep_equal(&self_loop(7), &self_loop(7)).unwrap());
    assert!(!deep_equal(&self_loop(7), &self_loop(8)).unwrap());

    assert!(deep_equal(&weak_loop(7), &weak_loop(7)).unwrap());
    assert!(deep_equal(&refcell_loop(7), &refcell_loop(7)).unwrap());
}

#[test]
fn test_self_containing_collection_terminates() {
    let a = Looped { label: 1 };
    let b = Looped { label: 1 };
    let c = Looped { label: 2 };

    assert_eq!(stringify(&a), "[<cycle Looped>, 1]");
    assert!(deep_equal(&a, &a).unwrap());
    assert!(deep_equal(&a, &b).unwrap());
    assert!(!deep_equal(&a, &c).unwrap());

    // as a member the collection goes through multiset matching
    let held = |label| Holder {
        items: Looped { label },
    };
    assert!(deep_equal(&held(3), &held(3)).unwrap());
    assert!(!deep_equal(&held(3), &held(4)).unwrap());
}

#[test]
fn test_cycles_of_different_lengths() {
    // a -> a against b -> c -> b: the walk comes back to the pending pair (a, b)
    let single = self_loop(1);
    let pair = ring(1, 1);
    assert!(deep_equal(&single, &pair).unwrap());

    let mismatched = ring(1, 2);
    assert!(!deep_equal(&single, &mismatched).unwrap());
}

#[test]
fn test_back_pointers() {
    let a = tree("root", &["left", "right"]);
    let b = tree("root", &["right", "left"]);
    let c = tree("root", &["left", "other"]);

    assert!(deep_equal(&a, &b).unwrap());
    assert!(!deep_equal(&a, &c).unwrap());
}

#[test]
fn test_member_collections_are_unordered() {
    let left = tagged("a", &["1", "2", "3"]);
    let right = tagged("a", &["3", "1", "2"]);

    assert!(deep_equal(&left, &right).unwrap());
}

#[test]
fn test_top_level_collections_are_ordered() {
    assert!(!deep_equal(&vec![1, 2, 3], &vec![3, 1, 2]).unwrap());
    assert!(deep_equal(&vec![1, 2, 3], &vec![1, 2, 3]).unwrap());
    assert!(deep_equal(&[1u8, 2], &vec![1i64, 2]).unwrap());
}

#[test]
fn test_element_collections_are_ordered() {
    // collections nested inside a root collection are elements, not members
    let left = vec![vec![1, 2]];
    let right = vec![vec![2, 1]];
    assert!(!deep_equal(&left, &right).unwrap());
}

#[test]
fn test_composites_inside_member_collections() {
    let left = Team {
        title: "core".to_string(),
        members: vec![tagged("a", &["x", "y"]), tagged("b", &[])],
    };
    let right = Team {
        title: "core".to_string(),
        members: vec![tagged("b", &[]), tagged("a", &["y", "x"])],
    };
    let other = Team {
        title: "core".to_string(),
        members: vec![tagged("b", &[]), tagged("c", &["y", "x"])],
    };

    assert!(deep_equal(&left, &right).unwrap());
    assert!(!deep_equal(&left, &other).unwrap());
}

#[test]
fn test_member_collection_length_mismatch() {
    let left = tagged("a", &["x", "x"]);
    let right = tagged("a", &["x"]);

    let mut comparer = StructuralComparer::full().recording_errors();
    assert!(!comparer.compare(&left, &right).unwrap());
    assert!(comparer
        .errors()
        .iter()
        .any(|e| e.starts_with("Collection lengths differ")));
}

#[test]
fn test_missing_member_sensitivity() {
    let left = Wide {
        a: 1,
        b: "b".to_string(),
    };
    let right = Narrow { a: 1 };
    let other = Narrow { a: 2 };

    assert!(!deep_equal(&left, &right).unwrap());
    assert!(sub_equal(&left, &right).unwrap());
    assert!(!sub_equal(&left, &other).unwrap());
}

#[test]
fn test_shape_only_mode() {
    let left = tagged("a", &["x"]);
    let right = tagged("b", &["y", "z"]);

    assert!(shape_equal(&left, &right).unwrap());
    assert!(!deep_equal(&left, &right).unwrap());
}

#[test]
fn test_scenario_reordered_tags() {
    let left = tagged("a", &["x", "y"]);
    let right = tagged("a", &["y", "x"]);

    assert!(deep_equal(&left, &right).unwrap());
}

#[test]
fn test_scenario_name_mismatch_is_recorded() {
    let left = tagged("a", &[]);
    let right = tagged("b", &[]);

    let mut comparer = StructuralComparer::full().recording_errors();
    assert!(!comparer.compare(&left, &right).unwrap());
    assert_eq!(
        comparer.errors(),
        &[r#"Member name differs: "a" != "b""#.to_string()]
    );
}

#[test]
fn test_inputs_are_not_mutated() {
    let left = Rc::new(tagged("a", &["x", "y"]));
    let right = Rc::new(tagged("a", &["y", "x"]));

    deep_equal(&left, &right).unwrap();

    assert_eq!(left.tags, vec!["x".to_string(), "y".to_string()]);
    assert_eq!(right.tags, vec!["y".to_string(), "x".to_string()]);
    assert_eq!(Rc::strong_count(&left), 1);
}

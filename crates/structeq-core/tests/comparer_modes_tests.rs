#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use std::sync::Arc;
use structeq_core::errors::{Result, StructEqError};
use structeq_core::reflect::{
    missing_member, Composite, Handle, MemberDescriptor, Reflect, Reflected, TypeDescriptor,
    TypeKind,
};
use structeq_core::{
    intersection_equal, sub_shape_equal, ComparisonConfig, StructuralComparer,
};

/// Temperature with a computed member and a secret that cannot be read back
struct Reading {
    celsius: f64,
    secret: String,
}

impl Reflect for Reading {
    fn reflect(&self) -> Reflected<'_> {
        Reflected::Composite(self)
    }
}

impl Composite for Reading {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Reading>(TypeKind::Composite)
    }

    fn members(&self) -> Arc<[MemberDescriptor]> {
        Arc::from(vec![
            MemberDescriptor::property::<f64>("fahrenheit").read_only(),
            MemberDescriptor::property::<String>("secret").write_only(),
        ])
    }

    fn read(&self, member: &MemberDescriptor) -> Result<Handle<'_>> {
        match member.name() {
            "fahrenheit" => Ok(Handle::owned(self.celsius * 9.0 / 5.0 + 32.0)),
            _ => Err(missing_member(self, member)),
        }
    }
}

#[test]
fn test_ignored_members_are_skipped() {
    let left = account(1, 100, "");
    let right = account(1, 250, "");

    assert!(!StructuralComparer::full().compare(&left, &right).unwrap());
    assert!(StructuralComparer::full()
        .ignoring(["balance"])
        .compare(&left, &right)
        .unwrap());
}

#[test]
fn test_ignore_applies_at_every_depth() {
    let left = Team {
        title: "core".to_string(),
        members: vec![tagged("a", &["x"])],
    };
    let right = Team {
        title: "core".to_string(),
        members: vec![tagged("a", &["y"])],
    };

    let mut comparer = StructuralComparer::full().ignoring(vec!["tags".to_string()]);
    assert!(comparer.compare(&left, &right).unwrap());
    assert_eq!(comparer.ignored().collect::<Vec<_>>(), vec!["tags"]);
}

#[test]
fn test_fields_only_count_when_included() {
    let left = account(1, 100, "first");
    let right = account(1, 100, "second");

    assert!(StructuralComparer::full().compare(&left, &right).unwrap());

    let config = ComparisonConfig::full().with_include_fields(true);
    assert!(!StructuralComparer::new(config).compare(&left, &right).unwrap());
}

#[test]
fn test_intersection_compares_common_members() {
    let wide = Wide {
        a: 1,
        b: "b".to_string(),
    };

    assert!(intersection_equal(&wide, &Narrow { a: 1 }).unwrap());
    assert!(!intersection_equal(&wide, &Narrow { a: 2 }).unwrap());
}

#[test]
fn test_intersection_requires_matching_types() {
    let mut comparer = StructuralComparer::intersection().recording_errors();

    assert!(!comparer
        .compare(&Narrow { a: 1 }, &NarrowWide { a: 1 })
        .unwrap());
    assert!(comparer.errors()[0].contains("no members in common"));

    assert!(!comparer
        .compare(&Narrow { a: 1 }, &Unrelated { z: true })
        .unwrap());
}

#[test]
fn test_member_type_mismatch() {
    let mut comparer = StructuralComparer::full().recording_errors();

    assert!(!comparer
        .compare(&Narrow { a: 1 }, &NarrowWide { a: 1 })
        .unwrap());
    assert_eq!(
        comparer.errors(),
        &["Member a has type i32 on Narrow but i64 on NarrowWide".to_string()]
    );
}

#[test]
fn test_missing_member_diagnostics() {
    let wide = Wide {
        a: 1,
        b: "b".to_string(),
    };

    let mut comparer = StructuralComparer::full().recording_errors();
    assert!(!comparer.compare(&wide, &Narrow { a: 1 }).unwrap());
    assert_eq!(
        comparer.errors(),
        &["Member counts differ: Wide has [a: i32, b: String], Narrow has [a: i32]".to_string()]
    );

    let mut comparer = StructuralComparer::full().recording_errors();
    assert!(!comparer.compare(&wide, &Unrelated { z: false }).unwrap());
    assert!(comparer
        .errors()
        .iter()
        .any(|e| e == "Member counts differ: Wide has [a: i32, b: String], Unrelated has [z: bool]"));
}

#[test]
fn test_same_count_missing_member_reports_no_match() {
    let mut comparer = StructuralComparer::full().recording_errors();

    assert!(!comparer.compare(&Narrow { a: 1 }, &Unrelated { z: true }).unwrap());
    assert_eq!(
        comparer.errors(),
        &["No matching property a on Unrelated".to_string()]
    );
}

#[test]
fn test_sub_shape_ignores_values_and_missing_members() {
    let wide = Wide {
        a: 1,
        b: "b".to_string(),
    };

    assert!(sub_shape_equal(&wide, &Narrow { a: 99 }).unwrap());
    assert!(!sub_shape_equal(&Narrow { a: 1 }, &NarrowWide { a: 1 }).unwrap());
}

#[test]
fn test_shape_mode_accepts_numeric_types_of_different_width() {
    let mut comparer = StructuralComparer::shape();

    assert!(comparer.compare(&1u8, &900i64).unwrap());
    assert!(!comparer.compare(&1u8, &"one").unwrap());
}

#[test]
fn test_computed_members_compare_by_value() {
    let left = Reading {
        celsius: 100.0,
        secret: "left".to_string(),
    };
    let right = Reading {
        celsius: 100.0,
        secret: "right".to_string(),
    };
    let colder = Reading {
        celsius: 0.0,
        secret: String::new(),
    };

    // the write-only secret never takes part
    assert!(StructuralComparer::full().compare(&left, &right).unwrap());
    assert!(!StructuralComparer::full().compare(&left, &colder).unwrap());
    assert_ne!(left.secret, right.secret);
}

#[test]
fn test_recording_keeps_discovery_order() {
    let left = account(1, 100, "");
    let right = Account {
        id: 2,
        owner: "bob".to_string(),
        balance: 100,
        notes: String::new(),
    };

    let mut comparer = StructuralComparer::full().recording_errors();
    assert!(!comparer.compare(&left, &right).unwrap());

    let errors = comparer.take_errors();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("Member id differs"));
    assert!(errors[1].starts_with("Member owner differs"));
    assert!(comparer.errors().is_empty());
}

#[test]
fn test_unreadable_getter_propagates_error() {
    struct Broken;

    impl Reflect for Broken {
        fn reflect(&self) -> Reflected<'_> {
            Reflected::Composite(self)
        }
    }

    impl Composite for Broken {
        fn type_descriptor(&self) -> TypeDescriptor {
            TypeDescriptor::of::<Broken>(TypeKind::Composite)
        }

        fn members(&self) -> Arc<[MemberDescriptor]> {
            Arc::from(vec![MemberDescriptor::property::<i32>("ghost")])
        }

        fn read(&self, member: &MemberDescriptor) -> Result<Handle<'_>> {
            Err(missing_member(self, member))
        }
    }

    let err = StructuralComparer::full().compare(&Broken, &Broken).unwrap_err();
    assert_eq!(
        err,
        StructEqError::MemberNotFound {
            type_name: "Broken".to_string(),
            member: "ghost".to_string(),
        }
    );
}

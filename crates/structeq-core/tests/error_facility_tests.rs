use structeq_core::errors::{ExError, ExErrorKind, StructEqError};

#[test]
fn test_member_not_found_verifiable_by_kind() {
    let err = StructEqError::MemberNotFound {
        type_name: "Person".to_string(),
        member: "age".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MemberNotFound);
    assert_eq!(ex_err.code(), "ERR_MEMBER_NOT_FOUND");
    assert_eq!(ex_err.type_name(), Some("Person"));
    assert_eq!(ex_err.member(), Some("age"));
}

#[test]
fn test_not_readable_distinct_from_not_found() {
    let err = StructEqError::MemberNotReadable {
        type_name: "Credentials".to_string(),
        member: "password".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::MemberNotReadable);
    assert_eq!(ex_err.code(), "ERR_MEMBER_NOT_READABLE");
    assert_ne!(ex_err.kind(), ExErrorKind::MemberNotFound);
}

#[test]
fn test_borrow_conflict_structured_fields() {
    let err = StructEqError::BorrowConflict {
        type_name: "Node".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::BorrowConflict);
    assert_eq!(ex_err.type_name(), Some("Node"));
    assert_eq!(ex_err.member(), None);
    assert!(ex_err.message().contains("mutably borrowed"));
}

#[test]
fn test_invalid_config_from_toml() {
    let err = structeq_core::ComparisonConfig::from_toml_str("record_errors = \"yes\"").unwrap_err();

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidConfig);
    assert_eq!(ex_err.code(), "ERR_INVALID_CONFIG");
}

#[test]
fn test_serialization_and_io_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: StructEqError = json_err.into();
    assert_eq!(ExError::from(err).kind(), ExErrorKind::Serialization);

    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "left.json");
    let err: StructEqError = io_err.into();
    assert_eq!(ExError::from(err).code(), "ERR_IO");
}

#[test]
fn test_builder_context_in_display() {
    let ex_err = ExError::new(ExErrorKind::Internal)
        .with_op("compare")
        .with_member("children")
        .with_message("pending set out of balance");

    let rendered = ex_err.to_string();
    assert_eq!(
        rendered,
        "[ERR_INTERNAL] in operation 'compare': pending set out of balance (member: children)"
    );
    assert_eq!(ex_err.op(), Some("compare"));
}

// tests/statement_tests.rs

use aql_builder::ast::{
    Insert, Keyword, NullLiteral, ObjectLiteral, RawExpression, Remove, Replace, Return,
    SimpleReference, StringLiteral, Update, WithOptions,
};
use aql_builder::{Category, ErrorCode, Node, NodeKind, Render, Role, Value};

/// A stand-in node of the given category that prints as `text`.
fn raw(text: &str, category: Category) -> RawExpression {
    RawExpression::new(text).with_category(category)
}

const WRAPPED: [Category; 3] = [
    Category::Operation,
    Category::Statement,
    Category::PartialStatement,
];

const VALID_NAMES: [&str; 7] = [
    "_",
    "_x",
    "all_lower_case",
    "snakeCaseAlso",
    "CamelCaseHere",
    "ALL_UPPER_CASE",
    "__cRaZy__",
];

const MALFORMED_NAMES: [&str; 6] = ["", "-x", "in-valid", "also bad", "überbad", "spaß"];

fn non_text_names() -> Vec<Value> {
    vec![
        StringLiteral::new("for").into(),
        RawExpression::new("for").into(),
        SimpleReference::new("for").unwrap().into(),
        Keyword::new("for").unwrap().into(),
        NullLiteral::new().into(),
        aql_builder::ast::Identifier::new("users").unwrap().into(),
        42.into(),
        true.into(),
        Value::Null,
        Value::Object(vec![]),
        Value::Array(vec![]),
    ]
}

fn representative_values() -> Vec<(Value, NodeKind)> {
    vec![
        (42.into(), NodeKind::IntegerLiteral),
        ("id".into(), NodeKind::Identifier),
        ("some.ref".into(), NodeKind::SimpleReference),
        ("\"hello\"".into(), NodeKind::StringLiteral),
        (false.into(), NodeKind::BooleanLiteral),
        (Value::Null, NodeKind::NullLiteral),
    ]
}

// ============================================================================
// INSERT
// ============================================================================

#[test]
fn test_insert_is_statement() {
    let node = Node::from(Insert::new(None, "x", "y").unwrap());
    assert_eq!(node.category(), Category::Statement);
    assert_eq!(node.kind(), NodeKind::Insert);
}

#[test]
fn test_insert_generates_text() {
    assert_eq!(Insert::new(None, "x", "y").unwrap().to_aql(), "INSERT x INTO y");
}

#[test]
fn test_insert_auto_casts_expressions() {
    for (value, kind) in representative_values() {
        assert_eq!(Insert::new(None, value, "y").unwrap().expr().kind(), kind);
    }
}

#[test]
fn test_insert_wraps_non_expressions_in_parentheses() {
    for category in WRAPPED {
        let insert = Insert::new(None, raw("x", category), "y").unwrap();
        assert_eq!(insert.to_aql(), "INSERT (x) INTO y");
    }
}

#[test]
fn test_insert_does_not_wrap_expressions() {
    let insert = Insert::new(None, raw("x", Category::Expression), "y").unwrap();
    assert_eq!(insert.to_aql(), "INSERT x INTO y");
}

#[test]
fn test_insert_accepts_well_formed_collection_names() {
    for name in VALID_NAMES {
        let insert = Insert::new(None, "x", name).unwrap();
        assert_eq!(insert.collection().to_aql(), name);
    }
}

#[test]
fn test_insert_rejects_malformed_collection_names() {
    for name in MALFORMED_NAMES {
        let err = Insert::new(None, "x", name).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleViolation, "name {:?}", name);
        assert_eq!(err.role, Some(Role::Collection));
    }
}

#[test]
fn test_insert_rejects_other_values_as_collection_names() {
    for value in non_text_names() {
        let err = Insert::new(None, "x", value).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleViolation);
    }
}

#[test]
fn test_insert_rejects_keyword_collection_names() {
    for name in ["for", "RETURN", "Into"] {
        let err = Insert::new(None, "x", name).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleViolation);
    }
}

#[test]
fn test_insert_renders_preceding_node() {
    let prev = raw("$", Category::PartialStatement);
    let insert = Insert::new(Some(prev.into()), "x", "y").unwrap();
    assert_eq!(insert.to_aql(), "$ INSERT x INTO y");
}

#[test]
fn test_insert_rejects_expression_as_preceding_node() {
    let prev = raw("$", Category::Expression);
    let err = Insert::new(Some(prev.into()), "x", "y").unwrap_err();
    assert_eq!(err.code, ErrorCode::StructuralViolation);
}

#[test]
fn test_insert_reports_role_of_failed_cast() {
    let err = Insert::new(None, "not valid", "y").unwrap_err();
    assert_eq!(err.code, ErrorCode::CastFailure);
    assert_eq!(err.role, Some(Role::Expression));
}

#[test]
fn test_error_display_names_role_and_value() {
    let err = Insert::new(None, "x", "in-valid").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("(role-violation)"), "{}", text);
    assert!(text.contains("[collection name]"), "{}", text);
    assert!(text.ends_with(r#"value: "in-valid""#), "{}", text);
}

// ============================================================================
// UPDATE / REPLACE / REMOVE
// ============================================================================

#[test]
fn test_update_generates_text() {
    let update = Update::new(None, "x", "y", "z").unwrap();
    assert_eq!(Node::from(update.clone()).category(), Category::Statement);
    assert_eq!(update.to_aql(), "UPDATE x WITH y IN z");
}

#[test]
fn test_update_auto_casts_expressions() {
    for (value, kind) in representative_values() {
        assert_eq!(Update::new(None, value.clone(), "y", "z").unwrap().expr().kind(), kind);
        assert_eq!(Update::new(None, "x", value, "z").unwrap().with_expr().kind(), kind);
    }
}

#[test]
fn test_update_wraps_non_expressions_in_parentheses() {
    for category in WRAPPED {
        let update = Update::new(None, raw("x", category), "y", "z").unwrap();
        assert_eq!(update.to_aql(), "UPDATE (x) WITH y IN z");

        let update = Update::new(None, "x", raw("y", category), "z").unwrap();
        assert_eq!(update.to_aql(), "UPDATE x WITH (y) IN z");
    }
}

#[test]
fn test_update_collection_names() {
    for name in VALID_NAMES {
        let update = Update::new(None, "x", "y", name).unwrap();
        assert_eq!(update.collection().to_aql(), name);
    }
    for name in MALFORMED_NAMES {
        assert!(Update::new(None, "x", "y", name).is_err());
    }
    for value in non_text_names() {
        assert!(Update::new(None, "x", "y", value).is_err());
    }
}

#[test]
fn test_update_renders_preceding_node() {
    let prev = raw("$", Category::PartialStatement);
    let update = Update::new(Some(prev.into()), "x", "y", "z").unwrap();
    assert_eq!(update.to_aql(), "$ UPDATE x WITH y IN z");
}

#[test]
fn test_replace_generates_text() {
    let replace = Replace::new(None, "x", raw("y", Category::Operation), "z").unwrap();
    assert_eq!(replace.to_aql(), "REPLACE x WITH (y) IN z");
}

#[test]
fn test_remove_generates_text() {
    let remove = Remove::new(None, "doc._key", "users").unwrap();
    assert_eq!(remove.to_aql(), "REMOVE doc._key IN users");
    assert!(Remove::new(None, "x", "in-valid").is_err());
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_options_returns_wrapper() {
    let insert = Insert::new(None, "x", "y").unwrap();
    let wrapped = Node::from(insert.options(Value::Object(vec![])).unwrap());
    assert_eq!(wrapped.kind(), NodeKind::WithOptions);
    assert_eq!(wrapped.category(), Category::Statement);
    assert_eq!(wrapped.to_aql(), "INSERT x INTO y OPTIONS {}");
}

#[test]
fn test_options_wraps_objects_in_order() {
    let update = Update::new(None, "x", "y", "z").unwrap();
    let wrapped = update
        .options(Value::object([("a", 1), ("b", 2), ("c", 3)]))
        .unwrap();
    let keys: Vec<&str> = wrapped.opts().keys().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(wrapped.to_aql(), "UPDATE x WITH y IN z OPTIONS {a: 1, b: 2, c: 3}");
}

#[test]
fn test_options_clones_object_literals() {
    let insert = Insert::new(None, "x", "y").unwrap();
    let mut src = ObjectLiteral::new(Value::object([("a", 1), ("b", 2), ("c", 3)])).unwrap();
    let wrapped = insert.options(&src).unwrap();
    assert_eq!(src.to_aql(), wrapped.opts().to_aql());

    src.insert("d", 4).unwrap();
    assert_eq!(wrapped.opts().to_aql(), "{a: 1, b: 2, c: 3}");
}

#[test]
fn test_options_leave_statement_usable() {
    let remove = Remove::new(None, "x", "y").unwrap();
    let first = remove.options(Value::object([("ignoreErrors", true)])).unwrap();
    let second = remove.options(Value::Object(vec![])).unwrap();
    assert_ne!(first, second);
    assert_eq!(remove.to_aql(), "REMOVE x IN y");
}

#[test]
fn test_options_reject_non_objects() {
    let insert = Insert::new(None, "x", "y").unwrap();
    for value in [Value::Array(vec![]), Value::from(1), Value::from("a")] {
        let err = insert.options(value).unwrap_err();
        assert_eq!(err.code, ErrorCode::StructuralViolation);
    }
}

#[test]
fn test_options_only_wrap_modification_statements() {
    let ret = Return::new(None, "x").unwrap();
    let err = WithOptions::new(ret, Value::Object(vec![])).unwrap_err();
    assert_eq!(err.code, ErrorCode::StructuralViolation);
}

#[test]
fn test_options_wrapper_of_chained_statement() {
    let prev = raw("FOR x IN y", Category::PartialStatement);
    let insert = Insert::new(Some(prev.into()), "x", "z").unwrap();
    let wrapped = insert.options(Value::object([("overwrite", true)])).unwrap();
    assert_eq!(
        wrapped.to_aql(),
        "FOR x IN y INSERT x INTO z OPTIONS {overwrite: true}"
    );
}

#[test]
fn test_statement_serialization_is_stable() {
    let update = Update::new(None, "x", Value::object([("n", 1)]), "z").unwrap();
    let wrapped = update.options(Value::object([("keepNull", false)])).unwrap();
    assert_eq!(wrapped.to_aql(), wrapped.to_aql());
}

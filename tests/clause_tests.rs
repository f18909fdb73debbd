// tests/clause_tests.rs

use aql_builder::ast::{
    BinOp, BinaryOperation, Filter, For, Identifier, Let, Return, UnaryOp, UnaryOperation,
};
use aql_builder::{AqlError, Category, ErrorCode, Node, Render, Role, Value};

fn op(op: BinOp, left: impl Into<Value>, right: impl Into<Value>) -> BinaryOperation {
    BinaryOperation::new(op, left, right).unwrap()
}

// ============================================================================
// Partial statements
// ============================================================================

#[test]
fn test_for_generates_text() {
    let node = Node::from(For::new(None, "u", "users").unwrap());
    assert_eq!(node.category(), Category::PartialStatement);
    assert_eq!(node.to_aql(), "FOR u IN users");
}

#[test]
fn test_for_iterates_over_list() {
    let node = For::new(None, "n", vec![1, 2, 3]).unwrap();
    assert_eq!(node.to_aql(), "FOR n IN [1, 2, 3]");
}

#[test]
fn test_for_variable_role() {
    assert!(For::new(None, Identifier::new("u").unwrap(), "users").is_ok());

    for var in [Value::from("for"), Value::from("a.b"), Value::from(42), Value::from("")] {
        let err = For::new(None, var, "users").unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleViolation);
        assert_eq!(err.role, Some(Role::Variable));
    }
}

#[test]
fn test_filter_parenthesizes_condition() {
    let filter = Filter::new(None, op(BinOp::Equal, "u.active", true)).unwrap();
    assert_eq!(filter.to_aql(), "FILTER (u.active == true)");
}

#[test]
fn test_let_generates_text() {
    let let_ = Let::new(None, "total", op(BinOp::Add, "a", "b")).unwrap();
    assert_eq!(let_.to_aql(), "LET total = (a + b)");
}

#[test]
fn test_return_of_subquery_is_wrapped() {
    let sub = Node::from(For::new(None, "u", "users").unwrap()).ret("u").unwrap();
    let ret = Return::new(None, sub).unwrap();
    assert_eq!(ret.to_aql(), "RETURN (FOR u IN users RETURN u)");
}

// ============================================================================
// Chains
// ============================================================================

#[test]
fn test_chain_renders_left_to_right() -> Result<(), AqlError> {
    let query = Node::from(For::new(None, "u", "users")?)
        .filter(op(BinOp::GreaterEqual, "u.age", 18))?
        .let_("name", "u.name")?
        .ret(Value::object([("name", "name")]))?;

    assert_eq!(
        query.to_aql(),
        "FOR u IN users FILTER (u.age >= 18) LET name = u.name RETURN {name: name}"
    );
    Ok(())
}

#[test]
fn test_chain_into_modification() -> Result<(), AqlError> {
    let query = Node::from(For::new(None, "u", "users")?)
        .filter(op(BinOp::Equal, "u.active", false))?
        .remove("u", "users")?;

    assert_eq!(query.to_aql(), "FOR u IN users FILTER (u.active == false) REMOVE u IN users");
    assert_eq!(query.category(), Category::Statement);
    Ok(())
}

#[test]
fn test_chain_update_and_replace() -> Result<(), AqlError> {
    let update = Node::from(For::new(None, "u", "users")?)
        .update("u", Value::object([("seen", true)]), "users")?;
    assert_eq!(update.to_aql(), "FOR u IN users UPDATE u WITH {seen: true} IN users");

    let replace = Node::from(For::new(None, "u", "users")?)
        .replace("u", "'gone'", "archive")?;
    assert_eq!(replace.to_aql(), "FOR u IN users REPLACE u WITH \"gone\" IN archive");
    Ok(())
}

#[test]
fn test_chain_from_expression_fails() {
    let err = aql_builder::cast(1).unwrap().filter(true).unwrap_err();
    assert_eq!(err.code, ErrorCode::StructuralViolation);
}

#[test]
fn test_chain_propagates_collection_errors() {
    let err = Node::from(For::new(None, "u", "users").unwrap())
        .insert("u", "bad name")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RoleViolation);
}

// ============================================================================
// Operations
// ============================================================================

#[test]
fn test_binary_operation_is_operation() {
    let node = Node::from(op(BinOp::Multiply, 2, 3));
    assert_eq!(node.category(), Category::Operation);
    assert_eq!(node.to_aql(), "2 * 3");
}

#[test]
fn test_nested_operations_are_parenthesized() {
    let inner = op(BinOp::Add, "a", "b");
    let outer = op(BinOp::Multiply, inner, "c");
    assert_eq!(outer.to_aql(), "(a + b) * c");
}

#[test]
fn test_keyword_operators() {
    assert_eq!(op(BinOp::In, "x", vec![1, 2]).to_aql(), "x IN [1, 2]");
    assert_eq!(op(BinOp::NotIn, "x", vec![1]).to_aql(), "x NOT IN [1]");
    assert_eq!(op(BinOp::Like, "u.name", "'A%'").to_aql(), "u.name LIKE \"A%\"");
}

#[test]
fn test_unary_operation() {
    let not = UnaryOperation::new(UnaryOp::Not, op(BinOp::Equal, "a", "b")).unwrap();
    assert_eq!(not.to_aql(), "!(a == b)");

    let neg = UnaryOperation::new(UnaryOp::Negate, "x").unwrap();
    assert_eq!(neg.to_aql(), "-x");
}

#[test]
fn test_operand_cast_failure_carries_role() {
    let err = BinaryOperation::new(BinOp::Add, "a", "not valid").unwrap_err();
    assert_eq!(err.code, ErrorCode::CastFailure);
    assert_eq!(err.role, Some(Role::Operand));
}

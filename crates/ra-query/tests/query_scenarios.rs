//! End-to-end query scenarios: input document text in, result relation out

use ra_core::{parse_document, Cell, Relation};
use ra_query::{evaluate, QueryError, QuerySession};

const COMPANY: &str = r#"
Employee = {
name, dept, salary
'Ann', 1, 5000
'Bob', 2, 4000
'Cid', 1, 3000
'Dee', 3, 4500
}

Department = {
id, title
1, 'Sales'
2, 'Legal'
4, 'Support'
}

Former = {
name, dept, salary
'Bob', 2, 4000
'Eve', 2, 3500
}

π(name)(Employee ⨝ dept=id (σ title=='Sales' Department))
"#;

fn run(document: &str) -> Result<std::sync::Arc<Relation>, QueryError> {
    let doc = parse_document(document).unwrap();
    evaluate(doc.relations, &doc.query)
}

fn run_query(query: &str) -> Result<std::sync::Arc<Relation>, QueryError> {
    let doc = parse_document(COMPANY).unwrap();
    evaluate(doc.relations, query)
}

fn text(value: &str) -> Cell {
    Cell::text(value)
}

#[test]
fn test_document_query_end_to_end() {
    let result = run(COMPANY).unwrap();
    assert_eq!(result.columns(), &["name".to_string()]);
    assert_eq!(result.rows(), &[vec![text("Ann")], vec![text("Cid")]]);
}

#[test]
fn test_explicit_key_join_keeps_both_key_columns() {
    let result = run_query("Employee ⨝ dept=id Department").unwrap();
    assert_eq!(
        result.columns(),
        &["name", "dept", "salary", "id", "title"].map(String::from)
    );
    assert_eq!(result.len(), 3);
}

#[test]
fn test_full_outer_join_keeps_both_sides() {
    let result = run_query("Employee ⟗ dept=id Department").unwrap();
    // three matches, Dee without a department, Support without employees
    assert_eq!(result.len(), 5);
    let unmatched_right = result.rows().last().unwrap();
    assert_eq!(unmatched_right[0], Cell::Null);
    assert_eq!(unmatched_right[4], text("Support"));
}

#[test]
fn test_right_outer_join_follows_right_rows() {
    let result = run_query("π(title, name)(Employee ⟖ dept=id Department)").unwrap();
    assert_eq!(
        result.rows(),
        &[
            vec![text("Sales"), text("Ann")],
            vec![text("Sales"), text("Cid")],
            vec![text("Legal"), text("Bob")],
            vec![text("Support"), Cell::Null],
        ]
    );
}

#[test]
fn test_set_operations_over_subqueries() {
    let current = run_query("(Employee ∪ Former) - Former").unwrap();
    assert_eq!(current.len(), 3);
    assert!(!current.contains_row(&[text("Bob"), Cell::Integer(2), Cell::Integer(4000)]));

    let both = run_query("Employee ∩ Former").unwrap();
    assert_eq!(
        both.rows(),
        &[vec![text("Bob"), Cell::Integer(2), Cell::Integer(4000)]]
    );
}

#[test]
fn test_compound_selection_predicate() {
    let result =
        run_query("π(name)(σ (salary >= 4000 and not dept == 2) or name == 'Cid' Employee)")
            .unwrap();
    assert_eq!(
        result.rows(),
        &[vec![text("Ann")], vec![text("Cid")], vec![text("Dee")]]
    );
}

#[test]
fn test_projection_collapses_duplicates() {
    let result = run_query("π(dept) Employee").unwrap();
    assert_eq!(
        result.rows(),
        &[
            vec![Cell::Integer(1)],
            vec![Cell::Integer(2)],
            vec![Cell::Integer(3)]
        ]
    );
}

#[test]
fn test_cartesian_product_without_common_columns() {
    let result = run_query("(π(name)(σ dept==3 Employee)) ⨝ Department").unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result.columns(), &["name", "id", "title"].map(String::from));
}

#[test]
fn test_steps_trace_every_intermediate() {
    let doc = parse_document(COMPANY).unwrap();
    let mut session = QuerySession::from_relations(doc.relations).unwrap();
    session.evaluate(&doc.query).unwrap();

    let expressions: Vec<&str> = session
        .steps()
        .iter()
        .map(|s| s.expression.as_str())
        .collect();
    assert_eq!(
        expressions,
        vec![
            "σ title=='Sales' Department",
            "Employee ⨝ dept=id relation2",
            "π(name) relation1",
        ]
    );

    let json = serde_json::to_value(session.steps()).unwrap();
    assert_eq!(json[0]["target"], "relation2");
    assert_eq!(json[2]["target"], serde_json::Value::Null);
}

#[test]
fn test_errors_abort_evaluation() {
    assert!(matches!(
        run_query("π(name)(Employee ⨝ Missing)"),
        Err(QueryError::UnknownRelation { .. })
    ));
    assert!(matches!(
        run_query("Employee ∪ Department"),
        Err(QueryError::Core(ra_core::CoreError::SchemaMismatch { .. }))
    ));
    assert!(matches!(
        run_query("σ wage > 1 Employee"),
        Err(QueryError::Core(ra_core::CoreError::UnknownColumn { .. }))
    ));
}

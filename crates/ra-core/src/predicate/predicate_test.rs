use super::*;
use crate::test_utils::{int, rel, txt};

fn sample() -> Relation {
    rel(
        "R",
        &["a", "b"],
        vec![
            vec![int(1), txt("x")],
            vec![int(2), txt("y")],
            vec![int(3), txt("x")],
        ],
    )
}

fn matching(predicate: &str) -> Vec<i64> {
    let relation = sample();
    let predicate = Predicate::parse(predicate).unwrap();
    relation
        .selection(&predicate)
        .unwrap()
        .rows()
        .iter()
        .filter_map(|row| row[0].as_integer())
        .collect()
}

#[test]
fn test_parse_simple_comparison() {
    let predicate = Predicate::parse("b=='x'").unwrap();
    assert_eq!(
        predicate,
        Predicate::Compare {
            left: Operand::Column("b".to_string()),
            op: CompareOp::Eq,
            right: Operand::Literal(Cell::text("x")),
        }
    );
}

#[test]
fn test_comparison_operators() {
    assert_eq!(matching("a < 2"), vec![1]);
    assert_eq!(matching("a <= 2"), vec![1, 2]);
    assert_eq!(matching("a > 2"), vec![3]);
    assert_eq!(matching("a >= 2"), vec![2, 3]);
    assert_eq!(matching("a != 2"), vec![1, 3]);
    assert_eq!(matching("a == 2"), vec![2]);
    assert_eq!(matching("a > -1"), vec![1, 2, 3]);
}

#[test]
fn test_connectives_and_precedence() {
    assert_eq!(matching("b=='x' and a>1"), vec![3]);
    assert_eq!(matching("b=='y' or a==3"), vec![2, 3]);
    assert_eq!(matching("not b=='x'"), vec![2]);
    assert_eq!(matching("b=='y' | a==1 & b=='x'"), vec![1, 2]);
    assert_eq!(matching("(b=='y' || a==1) && a<2"), vec![1]);
    assert_eq!(matching("~(a==1)"), vec![2, 3]);
}

#[test]
fn test_literal_on_left_and_column_pairs() {
    assert_eq!(matching("2 < a"), vec![3]);
    assert_eq!(matching("a == a"), vec![1, 2, 3]);
    assert_eq!(matching("\"x\" == b"), vec![1, 3]);
}

#[test]
fn test_columns_listed() {
    let predicate = Predicate::parse("a > 1 and (b == 'x' or c != 2)").unwrap();
    assert_eq!(predicate.columns(), vec!["a", "b", "c"]);
}

#[test]
fn test_unknown_column() {
    let predicate = Predicate::parse("c == 1").unwrap();
    let err = sample().selection(&predicate).unwrap_err();
    assert!(matches!(err, CoreError::UnknownColumn { ref column, .. } if column == "c"));
}

#[test]
fn test_invalid_predicates() {
    for text in ["", "a", "a = 1", "a == ", "(a == 1", "a == 'x", "a == 1 b", "a # 1"] {
        let err = Predicate::parse(text).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidPredicate { .. }),
            "expected InvalidPredicate for {text:?}, got {err:?}"
        );
    }
}

#[test]
fn test_null_comparisons() {
    let null = Cell::Null;
    assert!(CompareOp::Eq.apply(&null, &Cell::Null));
    assert!(!CompareOp::Eq.apply(&null, &Cell::Integer(1)));
    assert!(CompareOp::NotEq.apply(&null, &Cell::Integer(1)));
    assert!(!CompareOp::Lt.apply(&null, &Cell::Integer(1)));
    assert!(!CompareOp::GtEq.apply(&Cell::Integer(1), &null));
}

#[test]
fn test_display_round_trips_through_parser() {
    let predicate = Predicate::parse("not a>1 or b=='x'").unwrap();
    let reparsed = Predicate::parse(&predicate.to_string()).unwrap();
    assert_eq!(predicate, reparsed);
}

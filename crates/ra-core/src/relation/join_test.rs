use super::*;
use crate::test_utils::{int, rel, txt};
use crate::CoreError;

fn r() -> Relation {
    rel(
        "R",
        &["a", "b"],
        vec![vec![int(1), txt("x")], vec![int(2), txt("y")]],
    )
}

fn s() -> Relation {
    rel(
        "S",
        &["a", "c"],
        vec![vec![int(1), txt("p")], vec![int(3), txt("q")]],
    )
}

fn names(relation: &Relation) -> Vec<&str> {
    relation.columns().iter().map(String::as_str).collect()
}

#[test]
fn test_natural_inner_join() {
    let result = r().inner_join(&s(), None).unwrap();
    assert_eq!(names(&result), vec!["a", "b", "c"]);
    assert_eq!(result.rows(), &[vec![int(1), txt("x"), txt("p")]]);
}

#[test]
fn test_natural_left_outer_join() {
    let result = r().left_outer_join(&s(), None).unwrap();
    assert_eq!(
        result.rows(),
        &[
            vec![int(1), txt("x"), txt("p")],
            vec![int(2), txt("y"), Cell::Null],
        ]
    );
}

#[test]
fn test_natural_right_outer_join_coalesces_key() {
    let result = r().right_outer_join(&s(), None).unwrap();
    assert_eq!(names(&result), vec!["a", "b", "c"]);
    assert_eq!(
        result.rows(),
        &[
            vec![int(1), txt("x"), txt("p")],
            vec![int(3), Cell::Null, txt("q")],
        ]
    );
}

#[test]
fn test_natural_full_outer_join() {
    let result = r().full_outer_join(&s(), None).unwrap();
    assert_eq!(
        result.rows(),
        &[
            vec![int(1), txt("x"), txt("p")],
            vec![int(2), txt("y"), Cell::Null],
            vec![int(3), Cell::Null, txt("q")],
        ]
    );
}

#[test]
fn test_no_common_columns_is_cartesian_product() {
    let left = rel("A", &["a"], vec![vec![int(1)], vec![int(2)], vec![int(3)]]);
    let right = rel("B", &["b"], vec![vec![txt("u")], vec![txt("v")]]);
    let result = left.inner_join(&right, None).unwrap();
    assert_eq!(result.len(), left.len() * right.len());
    assert_eq!(names(&result), vec!["a", "b"]);
}

#[test]
fn test_explicit_key_with_different_names_keeps_both() {
    let students = rel(
        "Students",
        &["id", "name"],
        vec![vec![int(1), txt("Bob")], vec![int(2), txt("Jim")]],
    );
    let grades = rel(
        "Grades",
        &["student", "grade"],
        vec![vec![int(1), txt("A")], vec![int(9), txt("C")]],
    );
    let result = students
        .inner_join(&grades, Some(("id", "student")))
        .unwrap();
    assert_eq!(names(&result), vec!["id", "name", "student", "grade"]);
    assert_eq!(
        result.rows(),
        &[vec![int(1), txt("Bob"), int(1), txt("A")]]
    );

    let full = students
        .full_outer_join(&grades, Some(("id", "student")))
        .unwrap();
    assert_eq!(
        full.rows(),
        &[
            vec![int(1), txt("Bob"), int(1), txt("A")],
            vec![int(2), txt("Jim"), Cell::Null, Cell::Null],
            vec![Cell::Null, Cell::Null, int(9), txt("C")],
        ]
    );
}

#[test]
fn test_explicit_same_name_key_suffixes_other_shared_columns() {
    let left = rel("L", &["a", "b"], vec![vec![int(1), txt("x")]]);
    let right = rel("R", &["a", "b"], vec![vec![int(1), txt("y")]]);
    let result = left.inner_join(&right, Some(("a", "a"))).unwrap();
    assert_eq!(names(&result), vec!["a", "b_x", "b_y"]);
    assert_eq!(result.rows(), &[vec![int(1), txt("x"), txt("y")]]);
}

#[test]
fn test_suffix_skips_names_already_in_schema() {
    let left = rel("L", &["a", "b", "b_x"], vec![vec![int(1), txt("x"), txt("z")]]);
    let right = rel("R", &["a", "b"], vec![vec![int(1), txt("y")]]);
    let result = left.inner_join(&right, Some(("a", "a"))).unwrap();
    assert_eq!(names(&result), vec!["a", "b_x_x", "b_x", "b_y"]);
}

#[test]
fn test_chained_explicit_key_joins_keep_columns_unique() {
    let once = r().inner_join(&s(), Some(("b", "c"))).unwrap();
    assert_eq!(names(&once), vec!["a_x", "b", "a_y", "c"]);
    let twice = once.inner_join(&s(), Some(("b", "c"))).unwrap();
    assert_eq!(names(&twice), vec!["a_x", "b", "a_y", "c_x", "a", "c_y"]);
    let thrice = twice.full_outer_join(&s(), Some(("b", "c"))).unwrap();
    assert_eq!(
        names(&thrice),
        vec!["a_x", "b", "a_y", "c_x", "a_x_x", "c_y", "a_y_y", "c"]
    );

    let unique: HashSet<&str> = names(&thrice).into_iter().collect();
    assert_eq!(unique.len(), thrice.columns().len());
    assert!(thrice.projection(&["a_x_x"]).is_ok());
}

#[test]
fn test_explicit_key_unknown_column() {
    let err = r().inner_join(&s(), Some(("a", "zzz"))).unwrap_err();
    assert!(matches!(err, CoreError::UnknownColumn { ref column, .. } if column == "zzz"));
}

#[test]
fn test_null_keys_never_match() {
    let left = rel("L", &["k", "v"], vec![vec![Cell::Null, int(1)]]);
    let right = rel("R", &["k", "w"], vec![vec![Cell::Null, int(2)]]);
    assert!(left.inner_join(&right, None).unwrap().is_empty());
    assert_eq!(left.full_outer_join(&right, None).unwrap().len(), 2);
}

#[test]
fn test_join_deduplicates() {
    let left = rel(
        "L",
        &["a", "b"],
        vec![vec![int(1), txt("x")], vec![int(1), txt("y")]],
    );
    let right = rel("R", &["a"], vec![vec![int(1)]]);
    let joined = left.inner_join(&right, None).unwrap();
    let keys = joined.projection(&["a"]).unwrap();
    assert_eq!(joined.len(), 2);
    assert_eq!(keys.len(), 1);
}

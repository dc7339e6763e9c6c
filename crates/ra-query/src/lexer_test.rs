use super::*;

fn kinds(expr: &str) -> Vec<TokenKind> {
    tokenize(expr)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn word(text: &str) -> TokenKind {
    TokenKind::Word(text.to_string())
}

#[test]
fn test_projection_with_argument_group() {
    assert_eq!(
        kinds("π(a, b) relation1"),
        vec![
            TokenKind::Operator(OperatorKind::Projection),
            TokenKind::Group("a, b".to_string()),
            word("relation1"),
        ]
    );
}

#[test]
fn test_binary_join_with_key() {
    assert_eq!(
        kinds("Employee ⨝ dept=id Department"),
        vec![
            word("Employee"),
            TokenKind::Operator(OperatorKind::InnerJoin),
            word("dept=id"),
            word("Department"),
        ]
    );
}

#[test]
fn test_operator_symbol_splits_words() {
    assert_eq!(
        kinds("R∪S"),
        vec![
            word("R"),
            TokenKind::Operator(OperatorKind::Union),
            word("S"),
        ]
    );
}

#[test]
fn test_standalone_minus_is_difference() {
    assert_eq!(
        kinds("A - B"),
        vec![
            word("A"),
            TokenKind::Operator(OperatorKind::Difference),
            word("B"),
        ]
    );
}

#[test]
fn test_minus_inside_word_is_not_an_operator() {
    assert_eq!(
        kinds("σ a>-1 R"),
        vec![
            TokenKind::Operator(OperatorKind::Selection),
            word("a>-1"),
            word("R"),
        ]
    );
}

#[test]
fn test_quoted_literal_hides_operator_symbols() {
    assert_eq!(
        kinds("σ b == 'x - y' R"),
        vec![
            TokenKind::Operator(OperatorKind::Selection),
            word("b"),
            word("=="),
            word("'x - y'"),
            word("R"),
        ]
    );
    assert_eq!(
        kinds("σ b==\"∪ (x\" R"),
        vec![
            TokenKind::Operator(OperatorKind::Selection),
            word("b==\"∪ (x\""),
            word("R"),
        ]
    );
}

#[test]
fn test_quoted_brackets_inside_group() {
    assert_eq!(
        kinds("σ(b==')') R"),
        vec![
            TokenKind::Operator(OperatorKind::Selection),
            TokenKind::Group("b==')'".to_string()),
            word("R"),
        ]
    );
}

#[test]
fn test_spans_cover_source_text() {
    let expr = "σ (a>1) R";
    let tokens = tokenize(expr).unwrap();
    assert_eq!(&expr[tokens[0].span.clone()], "σ");
    assert_eq!(&expr[tokens[1].span.clone()], "(a>1)");
    assert_eq!(&expr[tokens[2].span.clone()], "R");
}

#[test]
fn test_nested_group_kept_whole() {
    assert_eq!(
        kinds("σ(a>1 and (b=='x')) R"),
        vec![
            TokenKind::Operator(OperatorKind::Selection),
            TokenKind::Group("a>1 and (b=='x')".to_string()),
            word("R"),
        ]
    );
}

#[test]
fn test_stray_close_bracket() {
    let err = tokenize("R ) S").unwrap_err();
    assert!(matches!(err, QueryError::MalformedExpression { .. }));
}

#[test]
fn test_unclosed_group() {
    let err = tokenize("π(a R").unwrap_err();
    assert!(matches!(err, QueryError::MalformedExpression { .. }));
}

#[test]
fn test_empty_expression() {
    assert!(tokenize("   ").unwrap().is_empty());
}

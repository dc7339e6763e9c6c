//! Reserved operator symbols of the expression language

/// Selection (`σ <predicate> <relation>`)
pub const SELECTION: char = 'σ';
/// Projection (`π <columns> <relation>`)
pub const PROJECTION: char = 'π';
/// Inner join
pub const INNER_JOIN: char = '⨝';
/// Left outer join
pub const LEFT_OUTER_JOIN: char = '⟕';
/// Right outer join
pub const RIGHT_OUTER_JOIN: char = '⟖';
/// Full outer join
pub const FULL_OUTER_JOIN: char = '⟗';
/// Set union
pub const UNION: char = '∪';
/// Set intersection
pub const INTERSECTION: char = '∩';
/// Set difference
pub const DIFFERENCE: char = '-';

/// Every operator symbol, in the order operators are listed in documentation
pub const ALL: [char; 9] = [
    SELECTION,
    PROJECTION,
    INNER_JOIN,
    LEFT_OUTER_JOIN,
    RIGHT_OUTER_JOIN,
    FULL_OUTER_JOIN,
    UNION,
    INTERSECTION,
    DIFFERENCE,
];

/// Check whether a line of text mentions any operator symbol
pub fn contains_operator(text: &str) -> bool {
    text.chars().any(|c| ALL.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_operator() {
        assert!(contains_operator("R ⨝ S"));
        assert!(contains_operator("A - B"));
        assert!(!contains_operator("Students = {"));
        assert!(!contains_operator("1, 'Bob'"));
    }
}

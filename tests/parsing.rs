//! Tests of the written clause syntax: parse shapes, the grouping behaviour of bare operators, and rendering round-trips.

use clausal::{parser::parse, structures::expression::Expression};

fn lit(name: &str) -> Expression {
    Expression::literal(name)
}

#[test]
fn atoms() {
    assert_eq!(parse("A"), Ok(lit("A")));
    assert_eq!(parse("turtle7"), Ok(lit("TURTLE7")));
}

#[test]
fn connectives() {
    assert_eq!(parse("~A"), Ok(Expression::not(lit("A"))));
    assert_eq!(parse("A & B"), Ok(Expression::and(lit("A"), lit("B"))));
    assert_eq!(parse("A | B"), Ok(Expression::or(lit("A"), lit("B"))));
}

#[test]
fn implication_desugars() {
    assert_eq!(
        parse("A => B"),
        Ok(Expression::or(Expression::not(lit("A")), lit("B")))
    );

    // An already negated antecedent is unwrapped, not doubly negated.
    assert_eq!(parse("~A => B"), Ok(Expression::or(lit("A"), lit("B"))));
}

#[test]
fn bi_conditional_desugars() {
    assert_eq!(
        parse("A <=> B"),
        Ok(Expression::and(
            Expression::or(Expression::not(lit("A")), lit("B")),
            Expression::or(Expression::not(lit("B")), lit("A")),
        ))
    );
}

#[test]
fn bare_operators_fold_left_with_equal_strength() {
    assert_eq!(
        parse("A & B & C"),
        Ok(Expression::and(
            Expression::and(lit("A"), lit("B")),
            lit("C")
        ))
    );

    // `|` does not bind looser than `&`.
    assert_eq!(
        parse("A & B | C"),
        Ok(Expression::or(Expression::and(lit("A"), lit("B")), lit("C")))
    );
}

#[test]
fn written_groups_bind_first() {
    assert_eq!(
        parse("A & (B | C)"),
        Ok(Expression::and(lit("A"), Expression::or(lit("B"), lit("C"))))
    );

    assert_eq!(
        parse("~(A & B)"),
        Ok(Expression::not(Expression::and(lit("A"), lit("B"))))
    );
}

#[test]
fn a_long_bare_tail_folds_onto_a_grouped_head() {
    let head = Expression::or(
        Expression::and(Expression::and(lit("A"), lit("B")), lit("C")),
        lit("D"),
    );
    let expected = Expression::and(
        Expression::and(Expression::and(head, lit("E")), lit("G")),
        lit("H"),
    );

    assert_eq!(parse("((A & B) & C) | D & E & G & H"), Ok(expected));
}

#[test]
fn a_multi_operator_group_in_operand_position_spills() {
    // The tail of the right-hand group escapes to the enclosing level.
    let left = Expression::or(
        Expression::and(Expression::and(lit("H"), lit("J")), lit("I")),
        Expression::and(lit("K"), lit("U")),
    );
    let expected = Expression::and(left, lit("L"));

    assert_eq!(parse("(H & J & I) | (K & U & L)"), Ok(expected));
}

#[test]
fn rendering_round_trips() {
    let texts = [
        "A",
        "~A",
        "~~A",
        "A & B",
        "A | B",
        "A => B",
        "A <=> B",
        "~A & ~B",
        "~(A & B)",
        "~(A & B) | C",
        "A & (B | C)",
        "Z <=> (X | Y)",
        "((A & B) & C) | D & E & G & H",
        "(H & J & I) | (K & U & L)",
        "(A & (F & Y) | R)",
    ];

    for text in texts {
        let parsed = parse(text).expect("parse failure");
        assert_eq!(parse(&parsed.to_string()), Ok(parsed), "round-trip of {text:?}");
    }
}

#[test]
fn case_and_whitespace_are_insignificant() {
    assert_eq!(parse("a&b"), parse("  A  &  B  "));
    assert_eq!(parse("A B"), Ok(lit("AB")));
}

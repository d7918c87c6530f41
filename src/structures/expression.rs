//! Boolean expression trees.
//!
//! An [Expression] is a persistent tree over named atoms, closed under negation, conjunction, and disjunction.
//! Implication and the biconditional are derived connectives, built by [imply](Expression::imply) and [bi_conditional](Expression::bi_conditional) in terms of the primitive three.
//!
//! As the type admits no other node, every expression is boolean by construction --- there is no runtime check for an ill-typed leaf, and no code path for one.
//!
//! Equality (via [PartialEq]) is structural: the same shape with the same literal names.
//! For the order-invariant equality of disjunctive clauses, see [clause](crate::structures::clause).

use std::collections::{BTreeSet, HashMap};

/// A boolean expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// A named boolean atom.
    Literal(String),

    /// The negation of an expression.
    Not(Box<Expression>),

    /// The conjunction of two expressions.
    And(Box<Expression>, Box<Expression>),

    /// The disjunction of two expressions.
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// A literal with the given name.
    pub fn literal(name: impl Into<String>) -> Self {
        Expression::Literal(name.into())
    }

    /// The negation of `operand`.
    pub fn not(operand: Expression) -> Self {
        Expression::Not(Box::new(operand))
    }

    /// The conjunction of `left` and `right`.
    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    /// The disjunction of `left` and `right`.
    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    /// The negation of `self`, collapsing a double negation.
    ///
    /// `¬¬x` and `x` are logically equivalent, so negating `Not(x)` unwraps to `x` rather than stacking a second negation.
    pub fn negated(self) -> Self {
        match self {
            Expression::Not(operand) => *operand,
            other => Expression::not(other),
        }
    }

    /// `a → b`, expressed as `¬a ∨ b`.
    ///
    /// The antecedent is negated through [negated](Expression::negated), so an already negated antecedent is unwrapped rather than doubly negated --- `imply(~A, B)` is `A | B`.
    pub fn imply(antecedent: Expression, consequent: Expression) -> Self {
        Expression::or(antecedent.negated(), consequent)
    }

    /// `a ↔ b`, expressed as `(a → b) ∧ (b → a)`.
    pub fn bi_conditional(left: Expression, right: Expression) -> Self {
        Expression::and(
            Expression::imply(left.clone(), right.clone()),
            Expression::imply(right, left),
        )
    }

    /// Whether the expression is a bare literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Expression::Literal(_))
    }

    /// Whether the expression is a negation.
    pub fn is_negation(&self) -> bool {
        matches!(self, Expression::Not(_))
    }

    /// Whether the expression is a conjunction.
    pub fn is_and(&self) -> bool {
        matches!(self, Expression::And(_, _))
    }

    /// Whether the expression is a disjunction.
    pub fn is_or(&self) -> bool {
        matches!(self, Expression::Or(_, _))
    }

    /// Whether the expression is a binary node.
    pub fn is_binary(&self) -> bool {
        self.is_and() || self.is_or()
    }

    /// The distinct literal names appearing in the expression, in sorted order.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut symbols = BTreeSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, symbols: &mut BTreeSet<String>) {
        match self {
            Expression::Literal(name) => {
                symbols.insert(name.clone());
            }
            Expression::Not(operand) => operand.collect_symbols(symbols),
            Expression::And(left, right) | Expression::Or(left, right) => {
                left.collect_symbols(symbols);
                right.collect_symbols(symbols);
            }
        }
    }

    /// The value of the expression on the given assignment, or [None] if some literal is unassigned.
    pub fn value_on(&self, assignment: &HashMap<String, bool>) -> Option<bool> {
        match self {
            Expression::Literal(name) => assignment.get(name).copied(),
            Expression::Not(operand) => operand.value_on(assignment).map(|value| !value),
            Expression::And(left, right) => {
                Some(left.value_on(assignment)? && right.value_on(assignment)?)
            }
            Expression::Or(left, right) => {
                Some(left.value_on(assignment)? || right.value_on(assignment)?)
            }
        }
    }
}

/// Renders in the clause syntax read by the [parser](crate::parser): literals bare, negation prefixed with `~`, binary nodes parenthesised.
///
/// A negation standing as the operand of a binary node is itself parenthesised.
/// The parser's grouping pass lets a bare `~` close the written group holding it, spilling the group's tail; the extra parentheses make the negation a group of its own, so every rendering re-parses to a structurally identical tree.
///
/// Parsing a rendering returns a structurally identical tree, and stored clauses are compared by this rendering on [retract](crate::context::Context::retract).
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(name) => write!(f, "{name}"),
            Expression::Not(operand) => write!(f, "~{operand}"),
            Expression::And(left, right) => {
                write!(f, "({} & {})", Operand(left), Operand(right))
            }
            Expression::Or(left, right) => {
                write!(f, "({} | {})", Operand(left), Operand(right))
            }
        }
    }
}

/// An expression in operand position within a binary node's rendering.
struct Operand<'e>(&'e Expression);

impl std::fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Expression::Not(_) => write!(f, "({})", self.0),
            other => write!(f, "{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imply_negates_the_antecedent() {
        let a = Expression::literal("A");
        let b = Expression::literal("B");

        assert_eq!(
            Expression::imply(a.clone(), b.clone()),
            Expression::or(Expression::not(a), b)
        );
    }

    #[test]
    fn imply_collapses_a_negated_antecedent() {
        let a = Expression::literal("A");
        let b = Expression::literal("B");

        // ~A => B is A | B, not ~~A | B.
        assert_eq!(
            Expression::imply(Expression::not(a.clone()), b.clone()),
            Expression::or(a, b)
        );
    }

    #[test]
    fn bi_conditional_is_a_pair_of_implications() {
        let a = Expression::literal("A");
        let b = Expression::literal("B");

        assert_eq!(
            Expression::bi_conditional(a.clone(), b.clone()),
            Expression::and(
                Expression::imply(a.clone(), b.clone()),
                Expression::imply(b, a)
            )
        );
    }

    #[test]
    fn rendering() {
        let e = Expression::or(
            Expression::not(Expression::literal("A")),
            Expression::and(Expression::literal("B"), Expression::literal("C")),
        );
        assert_eq!(e.to_string(), "((~A) | (B & C))");
    }

    #[test]
    fn negations_render_bare_only_outside_operand_position() {
        let a = Expression::literal("A");
        assert_eq!(Expression::not(a.clone()).to_string(), "~A");
        assert_eq!(
            Expression::not(Expression::and(a.clone(), Expression::literal("B"))).to_string(),
            "~(A & B)"
        );

        let e = Expression::and(
            Expression::not(a.clone()),
            Expression::not(Expression::literal("B")),
        );
        assert_eq!(e.to_string(), "((~A) & (~B))");
    }

    #[test]
    fn value_on_an_assignment() {
        let e = Expression::or(
            Expression::not(Expression::literal("A")),
            Expression::literal("B"),
        );

        let mut assignment = HashMap::new();
        assignment.insert("A".to_string(), true);
        assert_eq!(e.value_on(&assignment), None);

        assignment.insert("B".to_string(), false);
        assert_eq!(e.value_on(&assignment), Some(false));

        assignment.insert("B".to_string(), true);
        assert_eq!(e.value_on(&assignment), Some(true));
    }
}

/*!
Conversion to conjunctive normal form.

An [Expression] leaving the parser is free of `=>` and `<=>`, but negation may apply to arbitrary subtrees and conjunction may sit below disjunction.
Normalisation is two rewrites:

- [move_not_inwards] pushes each negation down to the literals by De Morgan's laws, eliminating double negation along the way.
- [distribute_and_over_or] distributes disjunction over conjunction until every disjunction is over literals.

[to_cnf] composes the two and splits the result at each top-level conjunction, returning the conjunct list.
Normalisation of a clause already in conjunctive normal form returns an equal expression.
*/

use crate::{misc::log::targets::{self}, structures::expression::Expression};

/// Push negation down to the literals.
///
/// `~(a & b)` becomes `~a | ~b`, `~(a | b)` becomes `~a & ~b`, and `~~a` becomes `a`.
pub fn move_not_inwards(expression: Expression) -> Expression {
    match expression {
        Expression::Literal(_) => expression,

        Expression::Not(operand) => match *operand {
            Expression::Literal(_) => Expression::Not(operand),

            Expression::Not(inner) => move_not_inwards(*inner),

            Expression::And(left, right) => Expression::or(
                move_not_inwards(Expression::Not(left)),
                move_not_inwards(Expression::Not(right)),
            ),

            Expression::Or(left, right) => Expression::and(
                move_not_inwards(Expression::Not(left)),
                move_not_inwards(Expression::Not(right)),
            ),
        },

        Expression::And(left, right) => {
            Expression::and(move_not_inwards(*left), move_not_inwards(*right))
        }

        Expression::Or(left, right) => {
            Expression::or(move_not_inwards(*left), move_not_inwards(*right))
        }
    }
}

/// Distribute disjunction over conjunction.
///
/// Requires negation already pushed to the literals.
/// When both operands of a disjunction are conjunctions the left is split first, so `(a & b) | (c & d)` yields conjuncts in the order `a|c`, `a|d`, `b|c`, `b|d`.
pub fn distribute_and_over_or(expression: Expression) -> Expression {
    match expression {
        Expression::Literal(_) | Expression::Not(_) => expression,

        Expression::And(left, right) => Expression::and(
            distribute_and_over_or(*left),
            distribute_and_over_or(*right),
        ),

        Expression::Or(left, right) => {
            let left = distribute_and_over_or(*left);
            let right = distribute_and_over_or(*right);

            if let Expression::And(first, second) = left {
                return Expression::and(
                    distribute_and_over_or(Expression::or(*first, right.clone())),
                    distribute_and_over_or(Expression::or(*second, right)),
                );
            }

            if let Expression::And(first, second) = right {
                return Expression::and(
                    distribute_and_over_or(Expression::or(left.clone(), *first)),
                    distribute_and_over_or(Expression::or(left, *second)),
                );
            }

            Expression::or(left, right)
        }
    }
}

/// Split an expression at each top-level conjunction.
pub fn conjuncts(expression: &Expression) -> Vec<&Expression> {
    let mut parts = Vec::new();
    let mut stack = vec![expression];
    while let Some(next) = stack.pop() {
        match next {
            Expression::And(left, right) => {
                stack.push(right);
                stack.push(left);
            }
            _ => parts.push(next),
        }
    }
    parts
}

/// The expression in conjunctive normal form, as a single tree.
pub fn to_cnf_expression(expression: Expression) -> Expression {
    let normal = distribute_and_over_or(move_not_inwards(expression));
    log::trace!(target: targets::CNF, "normal form: {normal}");
    normal
}

/// The expression in conjunctive normal form, split into its conjuncts.
///
/// Each returned expression is a disjunction of literals (or a lone literal).
pub fn to_cnf(expression: Expression) -> Vec<Expression> {
    let normal = to_cnf_expression(expression);
    conjuncts(&normal).into_iter().cloned().collect()
}

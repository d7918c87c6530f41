//! Disjunctive clauses and their canonical form.
//!
//! After normalisation to conjunctive normal form a clause is a disjunction of literals, and the order of its disjuncts carries no meaning --- `A | B` and `B | A` are the same clause.
//! Rather than comparing clauses through a sorted rendering, a [CanonicalClause] holds the deduplicated, ordered set of [Lit]s of a clause, so equality and hashing are order-invariant by construction.
//!
//! Both entailment strategies rely on this form: the resolution engine to deduplicate resolvents and detect its fixpoint, and the tests of either to compare clause sets up to permutation.

use std::collections::BTreeSet;

use crate::{structures::expression::Expression, types::err::ClauseError};

/// A literal: a named atom paired with a polarity.
///
/// Ordered by name and then polarity, so sets of literals have a stable traversal order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit {
    name: String,
    polarity: bool,
}

impl Lit {
    pub fn new(name: impl Into<String>, polarity: bool) -> Self {
        Lit {
            name: name.into(),
            polarity,
        }
    }

    /// The literal with the opposite polarity.
    pub fn negated(&self) -> Self {
        Lit {
            name: self.name.clone(),
            polarity: !self.polarity,
        }
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.name),
            false => write!(f, "~{}", self.name),
        }
    }
}

/// A disjunctive clause as an ordered set of literals.
///
/// Construction deduplicates repeated disjuncts, and the derived equality and hash are order-invariant.
/// The empty clause is the contradiction derived by a completed resolution refutation.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalClause {
    lits: BTreeSet<Lit>,
}

impl CanonicalClause {
    /// The canonical form of a CNF clause.
    ///
    /// Every disjunct must be a literal or a negated literal; any other shape --- possible only for an expression which has not passed through [to_cnf](crate::cnf::to_cnf) --- is an error.
    pub fn from_expression(clause: &Expression) -> Result<Self, ClauseError> {
        let mut lits = BTreeSet::new();

        for disjunct in disjuncts(clause) {
            match disjunct {
                Expression::Literal(name) => {
                    lits.insert(Lit::new(name.clone(), true));
                }
                Expression::Not(operand) => match operand.as_ref() {
                    Expression::Literal(name) => {
                        lits.insert(Lit::new(name.clone(), false));
                    }
                    other => return Err(ClauseError::NonLiteralDisjunct(other.to_string())),
                },
                other => return Err(ClauseError::NonLiteralDisjunct(other.to_string())),
            }
        }

        Ok(CanonicalClause { lits })
    }

    /// Whether the clause has no literals.
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    /// The number of distinct literals.
    pub fn len(&self) -> usize {
        self.lits.len()
    }

    /// Whether the clause contains the given literal.
    pub fn contains(&self, lit: &Lit) -> bool {
        self.lits.contains(lit)
    }

    /// The literals of the clause, in order.
    pub fn lits(&self) -> impl Iterator<Item = &Lit> {
        self.lits.iter()
    }

    /// The clause with `without` removed, unioned with `other` less `other_without`.
    ///
    /// This is the resolvent construction: the complementary pair is dropped and the remaining disjuncts of both clauses are merged, deduplicating as a set operation.
    pub fn resolve_with(&self, without: &Lit, other: &Self, other_without: &Lit) -> Self {
        let mut lits = BTreeSet::new();
        lits.extend(self.lits.iter().filter(|l| *l != without).cloned());
        lits.extend(other.lits.iter().filter(|l| *l != other_without).cloned());
        CanonicalClause { lits }
    }
}

/// The disjuncts of a clause: the leaves of its `Or` spine, left to right.
///
/// An expression with no top-level `Or` is a single disjunct.
pub fn disjuncts(clause: &Expression) -> Vec<&Expression> {
    let mut collected = Vec::new();
    collect_disjuncts(clause, &mut collected);
    collected
}

fn collect_disjuncts<'e>(clause: &'e Expression, collected: &mut Vec<&'e Expression>) {
    match clause {
        Expression::Or(left, right) => {
            collect_disjuncts(left, collected);
            collect_disjuncts(right, collected);
        }
        other => collected.push(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(text: &str) -> CanonicalClause {
        let parsed = crate::parser::parse(text).expect("parse failure");
        CanonicalClause::from_expression(&parsed).expect("canonicalisation failure")
    }

    #[test]
    fn order_has_no_meaning() {
        assert_eq!(clause("A | ~B | C"), clause("C | A | ~B"));
    }

    #[test]
    fn polarity_distinguishes() {
        assert_ne!(clause("A | B"), clause("A | ~B"));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(clause("A | B | A"), clause("A | B"));
        assert_eq!(clause("A | B | A").len(), 2);
    }

    #[test]
    fn resolvent_of_unit_clauses_is_empty() {
        let positive = clause("A");
        let negative = clause("~A");
        let pivot = Lit::new("A", true);

        let resolvent = positive.resolve_with(&pivot, &negative, &pivot.negated());
        assert!(resolvent.is_empty());
    }

    #[test]
    fn resolvent_merges_remainders() {
        let first = clause("A | B");
        let second = clause("~A | C | B");
        let pivot = Lit::new("A", true);

        let resolvent = first.resolve_with(&pivot, &second, &pivot.negated());
        assert_eq!(resolvent, clause("B | C"));
    }

    #[test]
    fn non_literal_disjunct_is_rejected() {
        let parsed = crate::parser::parse("A | (B & C)").expect("parse failure");
        assert!(CanonicalClause::from_expression(&parsed).is_err());
    }
}

/*!
Entailment strategies.

A strategy holds its own view of the knowledge base's clauses and answers entailment queries over them.
Two strategies are provided:

- [Truth table](truth_table): enumerate every truth assignment over the knowledge base's symbols, keep those satisfying every stored clause, and check the query on each.
- [Resolution](resolution): refutation search --- conjoin the negated query to the stored clauses and saturate with the resolution rule, looking for the empty clause.

Both are sound and complete for propositional entailment, so on any query neither can answer where both are within budget, they agree.
A strategy is selected on a context by [use_strategy](crate::context::Context::use_strategy) with a [StrategyKind], and may be swapped at any time --- each selection receives the current clauses through [Entailment::model_update].
*/

use std::str::FromStr;

use crate::{
    config::Config,
    structures::expression::Expression,
    types::err::{ContextError, EntailsError},
};

pub mod resolution;
pub mod truth_table;

/// An entailment procedure over a set of CNF clauses.
pub trait Entailment {
    /// Replace the strategy's clauses with the given clauses.
    ///
    /// Called on every mutation of the knowledge base, so a strategy never answers from a stale view.
    fn model_update(&mut self, clauses: &[Expression]);

    /// Whether the clauses entail the conjunction of `conjuncts`.
    ///
    /// [None] when the clause set is empty: an empty knowledge base supports no conclusion.
    fn entails(&mut self, conjuncts: &[Expression]) -> Result<Option<bool>, EntailsError>;
}

/// The strategies known to the library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    /// Truth table enumeration.
    TruthTable,

    /// Resolution refutation.
    Resolution,
}

impl StrategyKind {
    /// A fresh instance of the strategy, configured with the relevant budget.
    pub fn strategy(&self, config: &Config) -> Box<dyn Entailment> {
        match self {
            StrategyKind::TruthTable => Box::new(truth_table::TruthTable::new(config)),
            StrategyKind::Resolution => Box::new(resolution::Resolution::new(config)),
        }
    }
}

/// Reads the identifiers `truth_table`/`truthtable` and `resolution`/`proof_by_contradiction`, ignoring case.
impl FromStr for StrategyKind {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truth_table" | "truthtable" => Ok(StrategyKind::TruthTable),
            "resolution" | "proof_by_contradiction" => Ok(StrategyKind::Resolution),
            _ => Err(ContextError::UnknownStrategy(s.to_string())),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::TruthTable => write!(f, "truth_table"),
            StrategyKind::Resolution => write!(f, "resolution"),
        }
    }
}

/// The conjunction of the given conjuncts as a single expression, folded left to right.
///
/// [None] on an empty slice.
fn conjoin(conjuncts: &[Expression]) -> Option<Expression> {
    let mut parts = conjuncts.iter().cloned();
    let first = parts.next()?;
    Some(parts.fold(first, Expression::and))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_read_case_insensitively() {
        assert_eq!(
            StrategyKind::from_str("Truth_Table"),
            Ok(StrategyKind::TruthTable)
        );
        assert_eq!(
            StrategyKind::from_str("PROOF_BY_CONTRADICTION"),
            Ok(StrategyKind::Resolution)
        );
        assert_eq!(
            StrategyKind::from_str("davis_putnam"),
            Err(ContextError::UnknownStrategy("davis_putnam".to_string()))
        );
    }
}

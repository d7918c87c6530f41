/*!
The resolution strategy.

Entailment by refutation: the query is negated, normalised, and conjoined to the stored clauses, and the combined set is saturated under the resolution rule.
Deriving the empty clause refutes the negation, so the knowledge base entails the query; saturating without deriving it shows the negation satisfiable, so the knowledge base does not.

Clauses are held in [canonical form](crate::structures::clause), so a resolvent differing from a known clause only in the order or multiplicity of its literals is recognised as already seen.
Saturation runs in rounds, each resolving every pair of clauses known at the round's start, and is refused with [BudgetExhausted](crate::types::err::EntailsError::BudgetExhausted) when the configured round limit is exceeded.
*/

use std::collections::HashSet;

use crate::{
    cnf::to_cnf,
    config::Config,
    misc::log::targets::{self},
    strategies::{conjoin, Entailment},
    structures::clause::CanonicalClause,
    structures::expression::Expression,
    types::err::EntailsError,
};

/// Entailment by resolution refutation.
pub struct Resolution {
    clauses: Vec<Expression>,
    round_limit: usize,
}

impl Resolution {
    pub fn new(config: &Config) -> Self {
        Resolution {
            clauses: Vec::new(),
            round_limit: config.round_limit,
        }
    }
}

/// Every resolvent of a pair of clauses, one per complementary pair of literals.
fn resolvents(left: &CanonicalClause, right: &CanonicalClause) -> Vec<CanonicalClause> {
    let mut derived = Vec::new();
    for lit in left.lits() {
        let complement = lit.negated();
        if right.contains(&complement) {
            derived.push(left.resolve_with(lit, right, &complement));
        }
    }
    derived
}

impl Entailment for Resolution {
    fn model_update(&mut self, clauses: &[Expression]) {
        self.clauses = clauses.to_vec();
    }

    fn entails(&mut self, conjuncts: &[Expression]) -> Result<Option<bool>, EntailsError> {
        if self.clauses.is_empty() {
            return Ok(None);
        }

        let query = match conjoin(conjuncts) {
            Some(query) => query,
            None => return Ok(None),
        };

        // The stored clauses together with the normalised negation of the query.
        let mut working: Vec<CanonicalClause> = Vec::new();
        let mut seen: HashSet<CanonicalClause> = HashSet::new();

        let negation = to_cnf(query.negated());
        for clause in self.clauses.iter().chain(negation.iter()) {
            let canonical = CanonicalClause::from_expression(clause)?;
            if seen.insert(canonical.clone()) {
                working.push(canonical);
            }
        }

        let mut round = 0;
        loop {
            round += 1;
            if round > self.round_limit {
                return Err(EntailsError::BudgetExhausted);
            }
            log::trace!(
                target: targets::RESOLUTION,
                "round {round}: {} clauses",
                working.len()
            );

            let mut fresh = Vec::new();
            for i in 0..working.len() {
                for j in (i + 1)..working.len() {
                    for resolvent in resolvents(&working[i], &working[j]) {
                        if resolvent.is_empty() {
                            log::debug!(
                                target: targets::RESOLUTION,
                                "empty clause derived in round {round}"
                            );
                            return Ok(Some(true));
                        }
                        if seen.insert(resolvent.clone()) {
                            fresh.push(resolvent);
                        }
                    }
                }
            }

            if fresh.is_empty() {
                // Saturated without contradiction.
                return Ok(Some(false));
            }
            working.extend(fresh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn clauses(texts: &[&str]) -> Vec<Expression> {
        texts
            .iter()
            .flat_map(|text| to_cnf(parse(text).expect("parse failure")))
            .collect()
    }

    fn query(strategy: &mut Resolution, text: &str) -> Result<Option<bool>, EntailsError> {
        let conjuncts = to_cnf(parse(text).expect("parse failure"));
        strategy.entails(&conjuncts)
    }

    #[test]
    fn modus_ponens() {
        let mut strategy = Resolution::new(&Config::default());
        strategy.model_update(&clauses(&["P", "P => Q"]));

        assert_eq!(query(&mut strategy, "Q"), Ok(Some(true)));
        assert_eq!(query(&mut strategy, "~Q"), Ok(Some(false)));
    }

    #[test]
    fn no_clauses_no_answer() {
        let mut strategy = Resolution::new(&Config::default());
        assert_eq!(query(&mut strategy, "Q"), Ok(None));
    }

    #[test]
    fn a_chain_of_implications() {
        let mut strategy = Resolution::new(&Config::default());
        strategy.model_update(&clauses(&["P & Q", "P => R", "(Q & R) => S"]));

        assert_eq!(query(&mut strategy, "S"), Ok(Some(true)));
    }

    #[test]
    fn an_unconstrained_conclusion_is_not_entailed() {
        let mut strategy = Resolution::new(&Config::default());
        strategy.model_update(&clauses(&["P | Q"]));

        assert_eq!(query(&mut strategy, "P"), Ok(Some(false)));
    }

    #[test]
    fn the_round_limit_is_respected() {
        let config = Config {
            round_limit: 0,
            ..Config::default()
        };
        let mut strategy = Resolution::new(&config);
        strategy.model_update(&clauses(&["P", "P => Q"]));

        assert_eq!(query(&mut strategy, "Q"), Err(EntailsError::BudgetExhausted));
    }
}
